//! Delete Requests
//!
//! POSTs to the per-kind delete endpoints.

use serde::Deserialize;

use super::{post, RequestBody};
use crate::error::SubmitError;
use crate::models::DeleteTarget;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeleteReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Only the `success` flag decides the outcome; the status is kept for logs
pub(crate) fn classify_delete(status: u16, reply: DeleteReply) -> Result<String, SubmitError> {
    if reply.success {
        Ok(reply.message.unwrap_or_default())
    } else {
        Err(SubmitError::Server { status, message: reply.error })
    }
}

/// Returns the server's confirmation message
pub async fn delete_target(target: &DeleteTarget) -> Result<String, SubmitError> {
    let reply = post(&target.endpoint(), RequestBody::Empty).await?;
    classify_delete(reply.status, reply.decode()?)
}
