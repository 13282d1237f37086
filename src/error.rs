//! Submission Errors
//!
//! Every way a form submission or delete request can fail.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::DuplicateError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Rejected before any request was sent
    #[error("{0}")]
    Validation(String),

    /// Server answered with a failure status or an `error` field
    #[error("server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// Resume email already belongs to a stored candidate
    #[error("duplicate email: {}", .0.error)]
    Duplicate(DuplicateError),

    /// Network failure or an unreadable reply
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<JsValue> for SubmitError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Transport(message)
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("Invalid server response: {}", err))
    }
}
