use super::types::Activity;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const DIRECTORY_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_SUCCESS_TEXT: &str = "Participant unregistered successfully";
pub const UNREGISTER_REJECTED_FALLBACK: &str = "Failed to unregister";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister participant";

/// Human friendly name derived from the local part of an email address.
///
/// `jane.doe_smith-x@school.edu` becomes `Jane Doe Smith X`. Only the first
/// character of each fragment is touched.
pub fn display_name(email: &str) -> String {
    let local = match email.split('@').next() {
        Some(local) if !local.is_empty() => local,
        _ => email,
    };

    local
        .split(['.', '_', '-'])
        .filter(|fragment| !fragment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn availability_label(activity: &Activity) -> String {
    format!("{} spots left", activity.spots_left())
}

pub fn participants_heading(count: usize) -> String {
    format!("Participants ({count})")
}

pub fn unregister_prompt(activity: &str, email: &str) -> String {
    format!("Are you sure you want to unregister {email} from {activity}?")
}
