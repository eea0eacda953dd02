use std::time::Duration;

/// How long a notice stays visible before it is hidden again.
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Runtime settings for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for the activity endpoints. Empty means same-origin relative paths.
    pub api_base: String,
    pub notice_duration: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            notice_duration: NOTICE_DURATION,
        }
    }
}

impl ClientConfig {
    /// Resolve the API base from the page's own origin.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .filter(|origin| !origin.is_empty() && origin != "null");

        match origin {
            Some(api_base) => Self {
                api_base,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn notice_duration_ms(&self) -> u32 {
        u32::try_from(self.notice_duration.as_millis()).unwrap_or(u32::MAX)
    }
}
