//! Browser Helpers
//!
//! Thin wrappers over window dialogs, navigation and local time.

use crate::models::DeleteKind;

/// Where the page goes after an action completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Href(&'static str),
    Reload,
}

impl Navigation {
    /// Listing page to show once a record of `kind` is gone
    pub fn after_delete(kind: DeleteKind) -> Self {
        match kind {
            DeleteKind::Candidate => Self::Href("/candidates"),
            DeleteKind::Shortlist => Self::Reload,
            DeleteKind::JobDescription => Self::Href("/job_descriptions"),
        }
    }

    pub fn apply(self) {
        let Some(window) = web_sys::window() else { return };
        let location = window.location();
        let result = match self {
            Self::Href(href) => location.set_href(href),
            Self::Reload => location.reload(),
        };
        if let Err(e) = result {
            log::error!("[Nav] Navigation to {:?} failed: {:?}", self, e);
        }
    }
}

pub fn reload_page() {
    Navigation::Reload.apply();
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `false` when the dialog cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Current time as the browser's locale time string
pub fn local_time_string() -> String {
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    js_sys::Date::new_0().to_locale_time_string(&locale).into()
}
