//! Feedback View-Model
//!
//! What a feedback container shows after a submission. Components render
//! `Option<Feedback>`; `None` is an empty container.

use crate::error::SubmitError;
use crate::models::{DuplicateError, ShortlistResult, UploadResult};

pub const UPLOAD_SERVER_FALLBACK: &str = "An error occurred while processing the resume";
pub const UPLOAD_TRANSPORT_FALLBACK: &str = "Failed to process resume. Please try again.";
pub const SHORTLIST_FALLBACK: &str = "Failed to shortlist candidates";

/// Bootstrap classes for the error alert
pub const ERROR_ALERT_CLASS: &str = "alert alert-danger alert-dismissible fade show";

#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Danger alert with a bold "Error!" lead-in
    Error(String),
    Duplicate(DuplicateError),
    Uploaded(UploadResult),
    Shortlisted(ShortlistResult),
}

impl Feedback {
    pub fn danger(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Map a failed submission to what the user sees.
    ///
    /// Server errors without a message use `server_fallback`; transport
    /// failures without one use `transport_fallback`.
    pub fn from_error(err: SubmitError, server_fallback: &str, transport_fallback: &str) -> Self {
        match err {
            SubmitError::Validation(message) => Self::danger(message),
            SubmitError::Duplicate(duplicate) => Self::Duplicate(duplicate),
            SubmitError::Server { message, .. } => {
                Self::danger(non_empty(message).unwrap_or_else(|| server_fallback.to_string()))
            }
            SubmitError::Transport(message) => {
                Self::danger(non_empty(Some(message)).unwrap_or_else(|| transport_fallback.to_string()))
            }
        }
    }

    pub fn upload_failure(err: SubmitError) -> Self {
        Self::from_error(err, UPLOAD_SERVER_FALLBACK, UPLOAD_TRANSPORT_FALLBACK)
    }

    pub fn shortlist_failure(err: SubmitError) -> Self {
        Self::from_error(err, SHORTLIST_FALLBACK, SHORTLIST_FALLBACK)
    }
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}
