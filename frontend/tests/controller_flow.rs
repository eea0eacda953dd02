use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use activity_signup_frontend::{
    ActivityApi, ApiError, Controller, Directory, DirectoryView, NoticeKind, PageState, Roster,
    SignupReceipt, StateHandle,
    activities::state::SignupForm,
};
use futures::executor::block_on;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    List,
    SignUp { activity: String, email: String },
    Unregister { activity: String, email: String },
}

#[derive(Default)]
struct Script {
    calls: Vec<Call>,
    directories: VecDeque<Result<Directory, ApiError>>,
    signups: VecDeque<Result<SignupReceipt, ApiError>>,
    unregisters: VecDeque<Result<(), ApiError>>,
}

/// In-memory service answering from queued responses and recording calls.
#[derive(Clone, Default)]
struct ScriptedApi {
    script: Rc<RefCell<Script>>,
}

impl ScriptedApi {
    fn with_directory(self, directory: Result<Directory, ApiError>) -> Self {
        self.script.borrow_mut().directories.push_back(directory);
        self
    }

    fn with_signup(self, reply: Result<SignupReceipt, ApiError>) -> Self {
        self.script.borrow_mut().signups.push_back(reply);
        self
    }

    fn with_unregister(self, reply: Result<(), ApiError>) -> Self {
        self.script.borrow_mut().unregisters.push_back(reply);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.script.borrow().calls.clone()
    }
}

fn unscripted() -> ApiError {
    ApiError::Transport("no scripted response".into())
}

impl ActivityApi for ScriptedApi {
    async fn list_activities(&self) -> Result<Directory, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call::List);
        script.directories.pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupReceipt, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call::SignUp {
            activity: activity.into(),
            email: email.into(),
        });
        script.signups.pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push(Call::Unregister {
            activity: activity.into(),
            email: email.into(),
        });
        script.unregisters.pop_front().unwrap_or_else(|| Err(unscripted()))
    }
}

type TestController = Controller<ScriptedApi, Rc<RefCell<PageState>>>;

fn controller(api: &ScriptedApi) -> TestController {
    Controller::new(api.clone(), Rc::new(RefCell::new(PageState::default())))
}

fn directory(json: &str) -> Directory {
    serde_json::from_str(json).expect("valid directory")
}

fn chess_club() -> Directory {
    directory(
        r#"{"Chess Club": {"description":"d","schedule":"s","max_participants":2,"participants":["a.b@x.com"]}}"#,
    )
}

fn chess_club_with(participants: &[&str]) -> Directory {
    let mut directory = chess_club();
    directory["Chess Club"].participants = participants.iter().map(|p| p.to_string()).collect();
    directory
}

fn notice(controller: &TestController) -> Option<(String, NoticeKind)> {
    controller
        .state()
        .with_state(|state| state.notice.clone().map(|n| (n.text, n.kind)))
}

fn fill_form(controller: &TestController, email: &str, activity: &str) {
    controller.state().update_state(|state| {
        state.form = SignupForm {
            email: email.into(),
            activity: activity.into(),
        };
    });
}

#[test]
fn initial_load_renders_cards_and_options() {
    let api = ScriptedApi::default().with_directory(Ok(chess_club()));
    let controller = controller(&api);

    block_on(controller.refresh());

    let (cards, options) = controller
        .state()
        .with_state(|state| (state.activity_cards(), state.activity_options()));
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Chess Club");
    assert_eq!(cards[0].availability, "1 spots left");
    let Roster::Participants(badges) = &cards[0].roster else {
        panic!("expected participants");
    };
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].label, "A B");
    assert_eq!(badges[0].email, "a.b@x.com");
    assert_eq!(options, vec!["Chess Club".to_string()]);
    assert_eq!(api.calls(), vec![Call::List]);
}

#[test]
fn failed_load_collapses_the_whole_listing() {
    let api = ScriptedApi::default()
        .with_directory(Ok(chess_club()))
        .with_directory(Err(ApiError::Malformed("expected a map".into())));
    let controller = controller(&api);

    block_on(controller.refresh());
    block_on(controller.refresh());

    controller.state().with_state(|state| {
        assert_eq!(state.directory, DirectoryView::Failed);
        assert!(state.activity_cards().is_empty());
        assert!(state.activity_options().is_empty());
        assert_eq!(state.notice, None);
    });
}

#[test]
fn successful_signup_clears_form_and_refetches_once() {
    let api = ScriptedApi::default()
        .with_signup(Ok(SignupReceipt {
            message: "Signed up new@x.com for Chess Club".into(),
        }))
        .with_directory(Ok(chess_club_with(&["a.b@x.com", "new@x.com"])));
    let controller = controller(&api);
    fill_form(&controller, "new@x.com", "Chess Club");

    block_on(controller.submit_signup());

    assert_eq!(
        api.calls(),
        vec![
            Call::SignUp {
                activity: "Chess Club".into(),
                email: "new@x.com".into(),
            },
            Call::List,
        ]
    );
    assert_eq!(
        notice(&controller),
        Some((
            "Signed up new@x.com for Chess Club".to_string(),
            NoticeKind::Success
        ))
    );
    controller.state().with_state(|state| {
        assert_eq!(state.form, SignupForm::default());
        assert_eq!(state.activity_cards()[0].availability, "0 spots left");
    });
}

#[test]
fn rejected_signup_shows_server_detail() {
    let api = ScriptedApi::default().with_signup(Err(ApiError::Rejected {
        status: 400,
        detail: Some("Already signed up".into()),
    }));
    let controller = controller(&api);
    fill_form(&controller, "a.b@x.com", "Chess Club");

    block_on(controller.submit_signup());

    assert_eq!(
        notice(&controller),
        Some(("Already signed up".to_string(), NoticeKind::Error))
    );
    assert_eq!(api.calls().len(), 1, "no re-fetch after a rejection");
    controller
        .state()
        .with_state(|state| assert_eq!(state.form.email, "a.b@x.com"));
}

#[test]
fn rejected_signup_without_detail_uses_fallback() {
    let api = ScriptedApi::default().with_signup(Err(ApiError::Rejected {
        status: 500,
        detail: None,
    }));
    let controller = controller(&api);

    block_on(controller.submit_signup());

    assert_eq!(
        notice(&controller),
        Some(("An error occurred".to_string(), NoticeKind::Error))
    );
}

#[test]
fn signup_transport_failure_shows_generic_message() {
    let api = ScriptedApi::default().with_signup(Err(ApiError::Transport("offline".into())));
    let controller = controller(&api);

    block_on(controller.submit_signup());

    assert_eq!(
        notice(&controller),
        Some((
            "Failed to sign up. Please try again.".to_string(),
            NoticeKind::Error
        ))
    );
}

#[test]
fn declined_confirmation_sends_nothing() {
    let api = ScriptedApi::default().with_directory(Ok(chess_club()));
    let controller = controller(&api);
    block_on(controller.refresh());
    let before = controller.state().with_state(|state| state.directory.clone());

    controller.request_unregister("Chess Club", "a.b@x.com");
    let prompt = controller.state().with_state(|state| {
        state
            .pending_unregister
            .as_ref()
            .map(|pending| pending.prompt())
    });
    assert_eq!(
        prompt.as_deref(),
        Some("Are you sure you want to unregister a.b@x.com from Chess Club?")
    );

    controller.cancel_unregister();
    block_on(controller.confirm_unregister());

    assert_eq!(api.calls(), vec![Call::List]);
    controller.state().with_state(|state| {
        assert_eq!(state.pending_unregister, None);
        assert_eq!(state.directory, before);
    });
}

#[test]
fn confirmed_unregister_refetches_then_reports_success() {
    let api = ScriptedApi::default()
        .with_unregister(Ok(()))
        .with_directory(Ok(chess_club_with(&[])));
    let controller = controller(&api);

    controller.request_unregister("Chess Club", "a.b@x.com");
    block_on(controller.confirm_unregister());

    assert_eq!(
        api.calls(),
        vec![
            Call::Unregister {
                activity: "Chess Club".into(),
                email: "a.b@x.com".into(),
            },
            Call::List,
        ]
    );
    assert_eq!(
        notice(&controller),
        Some((
            "Participant unregistered successfully".to_string(),
            NoticeKind::Success
        ))
    );
    controller.state().with_state(|state| {
        assert_eq!(state.pending_unregister, None);
        assert_eq!(state.activity_cards()[0].roster, Roster::Empty);
    });
}

#[test]
fn unregister_failures_are_reported() {
    let api = ScriptedApi::default()
        .with_unregister(Err(ApiError::Rejected {
            status: 400,
            detail: Some("Student is not registered for this activity".into()),
        }))
        .with_unregister(Err(ApiError::Rejected {
            status: 404,
            detail: None,
        }))
        .with_unregister(Err(ApiError::Transport("offline".into())));
    let controller = controller(&api);

    let mut seen = Vec::new();
    for _ in 0..3 {
        controller.request_unregister("Chess Club", "a.b@x.com");
        block_on(controller.confirm_unregister());
        seen.push(notice(&controller).map(|(text, _)| text));
    }

    assert_eq!(
        seen,
        vec![
            Some("Student is not registered for this activity".to_string()),
            Some("Failed to unregister".to_string()),
            Some("Failed to unregister participant".to_string()),
        ]
    );
    assert!(
        !api.calls().contains(&Call::List),
        "failed unregisters never re-fetch"
    );
}

#[test]
fn confirm_without_pending_request_is_a_no_op() {
    let api = ScriptedApi::default();
    let controller = controller(&api);

    block_on(controller.confirm_unregister());

    assert!(api.calls().is_empty());
    assert_eq!(notice(&controller), None);
}

#[test]
fn later_notice_survives_earlier_hide() {
    let api = ScriptedApi::default()
        .with_signup(Err(ApiError::Rejected {
            status: 400,
            detail: Some("Activity is full".into()),
        }))
        .with_unregister(Err(ApiError::Transport("offline".into())));
    let controller = controller(&api);

    block_on(controller.submit_signup());
    let first = controller
        .state()
        .with_state(|state| state.notice.as_ref().map(|n| n.ticket))
        .expect("notice shown");

    controller.request_unregister("Chess Club", "a.b@x.com");
    block_on(controller.confirm_unregister());
    controller
        .state()
        .update_state(|state| state.dismiss_notice(first));

    assert_eq!(
        notice(&controller),
        Some((
            "Failed to unregister participant".to_string(),
            NoticeKind::Error
        ))
    );
}
