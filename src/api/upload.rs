//! Upload Requests
//!
//! Resume upload to `/upload` and classification of its reply.

use serde::Deserialize;
use web_sys::FormData;

use super::{post, RequestBody};
use crate::error::SubmitError;
use crate::models::{DuplicateError, UploadResult};

/// Form field the server reads the resume from
pub const RESUME_FIELD: &str = "resume";

/// Every shape `/upload` can answer with
#[derive(Debug, Default, Deserialize)]
pub(crate) struct UploadReply {
    #[serde(default)]
    candidate_id: Option<u64>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    years_experience: Option<f64>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    existing_candidate_id: Option<u64>,
    #[serde(default)]
    existing_candidate_name: Option<String>,
}

/// Split an upload reply into a result or a tagged failure
pub(crate) fn classify_upload(status: u16, reply: UploadReply) -> Result<UploadResult, SubmitError> {
    let ok = (200..300).contains(&status);
    if !ok || reply.error.is_some() {
        if status == 409 {
            if let Some(existing_candidate_id) = reply.existing_candidate_id {
                return Err(SubmitError::Duplicate(DuplicateError {
                    error: reply.error.unwrap_or_default(),
                    existing_candidate_id,
                    existing_candidate_name: reply.existing_candidate_name.unwrap_or_default(),
                }));
            }
        }
        return Err(SubmitError::Server { status, message: reply.error });
    }

    let candidate_id = reply
        .candidate_id
        .ok_or_else(|| SubmitError::Transport("Upload response is missing candidate_id".to_string()))?;
    Ok(UploadResult {
        candidate_id,
        full_name: reply.full_name,
        email: reply.email,
        years_experience: reply.years_experience,
    })
}

pub async fn upload_resume(url: &str, file: &web_sys::File) -> Result<UploadResult, SubmitError> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(RESUME_FIELD, file, &file.name())?;

    let reply = post(url, RequestBody::Multipart(form)).await?;
    classify_upload(reply.status, reply.decode()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> UploadReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_reply() {
        let result = classify_upload(
            201,
            reply(r#"{"candidate_id": 42, "full_name": "Jane Doe", "email": "jane@x.com", "years_experience": 5}"#),
        )
        .unwrap();
        assert_eq!(result.candidate_id, 42);
        assert_eq!(result.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(result.years_experience, Some(5.0));
    }

    #[test]
    fn test_conflict_with_existing_id_is_duplicate() {
        let err = classify_upload(
            409,
            reply(r#"{"error": "Email already exists", "existing_candidate_id": 11, "existing_candidate_name": "Jane Doe"}"#),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SubmitError::Duplicate(DuplicateError {
                error: "Email already exists".to_string(),
                existing_candidate_id: 11,
                existing_candidate_name: "Jane Doe".to_string(),
            })
        );
    }

    #[test]
    fn test_conflict_without_existing_id_is_generic() {
        let err = classify_upload(409, reply(r#"{"error": "Conflict"}"#)).unwrap_err();
        assert_eq!(err, SubmitError::Server { status: 409, message: Some("Conflict".to_string()) });
    }

    #[test]
    fn test_existing_id_outside_conflict_is_generic() {
        let err = classify_upload(400, reply(r#"{"error": "Bad", "existing_candidate_id": 3}"#)).unwrap_err();
        assert!(matches!(err, SubmitError::Server { status: 400, .. }));
    }

    #[test]
    fn test_error_field_on_success_status() {
        let err = classify_upload(200, reply(r#"{"error": "Failed to parse resume"}"#)).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Server { status: 200, message: Some("Failed to parse resume".to_string()) }
        );
    }

    #[test]
    fn test_missing_candidate_id() {
        let err = classify_upload(201, reply(r#"{"message": "Resume processed successfully"}"#)).unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }
}
