use std::{cell::RefCell, rc::Rc};

use leptos::{RwSignal, SignalUpdate, SignalWithUntracked};

use super::api::{ActivityApi, ApiError};
use super::format::{
    SIGNUP_FAILED_TEXT, SIGNUP_REJECTED_FALLBACK, UNREGISTER_FAILED_TEXT,
    UNREGISTER_REJECTED_FALLBACK, UNREGISTER_SUCCESS_TEXT,
};
use super::state::{DirectoryView, NoticeKind, PageState, PendingUnregister};

/// Somewhere a `PageState` lives and can be read or modified.
pub trait StateHandle: Clone + 'static {
    fn with_state<R>(&self, f: impl FnOnce(&PageState) -> R) -> R;

    fn update_state(&self, f: impl FnOnce(&mut PageState));
}

impl StateHandle for RwSignal<PageState> {
    fn with_state<R>(&self, f: impl FnOnce(&PageState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut PageState)) {
        self.update(f);
    }
}

impl StateHandle for Rc<RefCell<PageState>> {
    fn with_state<R>(&self, f: impl FnOnce(&PageState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut PageState)) {
        f(&mut self.borrow_mut());
    }
}

/// Drives the activity endpoints and folds every outcome back into the page
/// state. Failures never escape: they become notices or the failed list.
#[derive(Clone)]
pub struct Controller<A, S> {
    api: A,
    state: S,
}

impl<A, S> Controller<A, S>
where
    A: ActivityApi,
    S: StateHandle,
{
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the directory and replace whatever the list showed before.
    pub async fn refresh(&self) {
        match self.api.list_activities().await {
            Ok(directory) => {
                log::debug!("loaded {} activities", directory.len());
                self.state
                    .update_state(|state| state.directory = DirectoryView::Ready(directory));
            }
            Err(err) => {
                log::error!("Error fetching activities: {err}");
                self.state
                    .update_state(|state| state.directory = DirectoryView::Failed);
            }
        }
    }

    /// Sign up with whatever the form holds right now.
    pub async fn submit_signup(&self) {
        let form = self.state.with_state(|state| state.form.clone());

        match self.api.sign_up(&form.activity, &form.email).await {
            Ok(receipt) => {
                log::info!("signed up {} for {}", form.email, form.activity);
                self.state.update_state(|state| {
                    state.show_notice(receipt.message, NoticeKind::Success);
                    state.form.reset();
                });
                self.refresh().await;
            }
            Err(ApiError::Rejected { status, detail }) => {
                log::warn!("sign-up rejected with status {status}");
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                self.notify(text, NoticeKind::Error);
            }
            Err(err) => {
                log::error!("Error signing up: {err}");
                self.notify(SIGNUP_FAILED_TEXT, NoticeKind::Error);
            }
        }
    }

    /// Ask the user to confirm removing `email` from `activity`.
    pub fn request_unregister(&self, activity: impl Into<String>, email: impl Into<String>) {
        let pending = PendingUnregister {
            activity: activity.into(),
            email: email.into(),
        };
        self.state
            .update_state(|state| state.pending_unregister = Some(pending));
    }

    pub fn cancel_unregister(&self) {
        self.state
            .update_state(|state| state.pending_unregister = None);
    }

    /// Carry out the confirmed unregister, if one is pending.
    pub async fn confirm_unregister(&self) {
        let Some(pending) = self
            .state
            .with_state(|state| state.pending_unregister.clone())
        else {
            return;
        };
        self.cancel_unregister();

        match self.api.unregister(&pending.activity, &pending.email).await {
            Ok(()) => {
                log::info!("unregistered {} from {}", pending.email, pending.activity);
                self.refresh().await;
                self.notify(UNREGISTER_SUCCESS_TEXT, NoticeKind::Success);
            }
            Err(ApiError::Rejected { status, detail }) => {
                log::warn!("unregister rejected with status {status}");
                let text = detail.unwrap_or_else(|| UNREGISTER_REJECTED_FALLBACK.to_string());
                self.notify(text, NoticeKind::Error);
            }
            Err(err) => {
                log::error!("Error unregistering: {err}");
                self.notify(UNREGISTER_FAILED_TEXT, NoticeKind::Error);
            }
        }
    }

    fn notify(&self, text: impl Into<String>, kind: NoticeKind) {
        let text = text.into();
        self.state.update_state(|state| {
            state.show_notice(text, kind);
        });
    }
}
