use super::format::{availability_label, display_name, unregister_prompt};
use super::types::Directory;

/// What the activity list currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirectoryView {
    #[default]
    Loading,
    Ready(Directory),
    Failed,
}

/// Values bound to the sign-up form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Content of the message region. `ticket` identifies this particular
/// showing so that its hide timer cannot hide a later message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub ticket: u64,
}

/// Unregister request waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUnregister {
    pub activity: String,
    pub email: String,
}

impl PendingUnregister {
    pub fn prompt(&self) -> String {
        unregister_prompt(&self.activity, &self.email)
    }
}

/// One participant pill. `email` is kept verbatim for the unregister call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantBadge {
    pub label: String,
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    Empty,
    Participants(Vec<ParticipantBadge>),
}

/// Everything needed to draw one activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub availability: String,
    pub roster: Roster,
}

/// The whole page. Views are derived from it, never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub directory: DirectoryView,
    pub form: SignupForm,
    pub notice: Option<Notice>,
    pub pending_unregister: Option<PendingUnregister>,
    last_ticket: u64,
}

impl PageState {
    /// Replace whatever message is showing and return the new ticket.
    pub fn show_notice(&mut self, text: impl Into<String>, kind: NoticeKind) -> u64 {
        self.last_ticket += 1;
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            ticket: self.last_ticket,
        });
        self.last_ticket
    }

    /// Hide the message only if it is still the one identified by `ticket`.
    pub fn dismiss_notice(&mut self, ticket: u64) {
        if self.notice.as_ref().is_some_and(|notice| notice.ticket == ticket) {
            self.notice = None;
        }
    }

    pub fn activity_cards(&self) -> Vec<ActivityCard> {
        let DirectoryView::Ready(directory) = &self.directory else {
            return Vec::new();
        };

        directory
            .iter()
            .map(|(name, activity)| {
                let roster = if activity.participants.is_empty() {
                    Roster::Empty
                } else {
                    Roster::Participants(
                        activity
                            .participants
                            .iter()
                            .map(|email| ParticipantBadge {
                                label: display_name(email),
                                activity: name.clone(),
                                email: email.clone(),
                            })
                            .collect(),
                    )
                };

                ActivityCard {
                    title: name.clone(),
                    description: activity.description.clone(),
                    schedule: activity.schedule.clone(),
                    availability: availability_label(activity),
                    roster,
                }
            })
            .collect()
    }

    pub fn activity_options(&self) -> Vec<String> {
        match &self.directory {
            DirectoryView::Ready(directory) => directory.keys().cloned().collect(),
            DirectoryView::Loading | DirectoryView::Failed => Vec::new(),
        }
    }
}
