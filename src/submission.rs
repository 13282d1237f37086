//! Form Submission Lifecycle
//!
//! Idle -> Busy -> (Success | Failed) -> Idle for every handler.
//! Validation runs inside the busy scope so a rejected form still releases
//! its control.

use std::future::Future;

use leptos_busy::{BusyGuard, BusyState};

use crate::config::megabytes_label;
use crate::error::SubmitError;
use crate::models::{ShortlistResult, UploadResult};

/// Anything with a byte size that can be checked before upload
pub trait SizedUpload {
    fn byte_size(&self) -> f64;
}

impl SizedUpload for web_sys::File {
    fn byte_size(&self) -> f64 {
        self.size()
    }
}

/// Run `op` with `busy` held; the control is released on every exit path
pub async fn run_submission<S, F, Fut, T>(busy: S, op: F) -> Result<T, SubmitError>
where
    S: BusyState,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, SubmitError>>,
{
    let _guard = BusyGuard::acquire(busy);
    op().await
}

pub fn validate_upload<U: SizedUpload>(file: Option<U>, max_bytes: u64) -> Result<U, SubmitError> {
    let file = file.ok_or_else(|| SubmitError::validation("Please select a file to upload"))?;
    if file.byte_size() > max_bytes as f64 {
        return Err(SubmitError::validation(format!(
            "File size exceeds {}MB limit",
            megabytes_label(max_bytes)
        )));
    }
    Ok(file)
}

pub fn validate_job_description(text: &str) -> Result<(), SubmitError> {
    if text.trim().is_empty() {
        return Err(SubmitError::validation("Job description is required"));
    }
    Ok(())
}

/// Validate the selected file and hand it to `send`
pub async fn submit_upload<S, U, F, Fut>(
    busy: S,
    file: Option<U>,
    max_bytes: u64,
    send: F,
) -> Result<UploadResult, SubmitError>
where
    S: BusyState,
    U: SizedUpload,
    F: FnOnce(U) -> Fut,
    Fut: Future<Output = Result<UploadResult, SubmitError>>,
{
    run_submission(busy, move || async move {
        let file = validate_upload(file, max_bytes)?;
        send(file).await
    })
    .await
}

/// Validate the description and hand the untrimmed text to `send`
pub async fn submit_shortlist<S, F, Fut>(
    busy: S,
    job_description: String,
    send: F,
) -> Result<ShortlistResult, SubmitError>
where
    S: BusyState,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<ShortlistResult, SubmitError>>,
{
    run_submission(busy, move || async move {
        validate_job_description(&job_description)?;
        send(job_description).await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    /// Records busy transitions
    #[derive(Default)]
    struct Control {
        transitions: RefCell<Vec<bool>>,
    }

    impl BusyState for Control {
        fn set_busy(&self, busy: bool) {
            self.transitions.borrow_mut().push(busy);
        }
    }

    impl Control {
        fn released(&self) -> bool {
            *self.transitions.borrow() == vec![true, false]
        }
    }

    struct FakeFile(f64);

    impl SizedUpload for FakeFile {
        fn byte_size(&self) -> f64 {
            self.0
        }
    }

    fn jane() -> UploadResult {
        UploadResult {
            candidate_id: 42,
            full_name: Some("Jane Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            years_experience: Some(5.0),
        }
    }

    #[test]
    fn test_validate_upload_limits() {
        assert!(validate_upload(Some(FakeFile(5_242_880.0)), DEFAULT_MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(
            validate_upload(Some(FakeFile(5_242_881.0)), DEFAULT_MAX_UPLOAD_BYTES).err(),
            Some(SubmitError::validation("File size exceeds 5MB limit"))
        );
        assert_eq!(
            validate_upload::<FakeFile>(None, DEFAULT_MAX_UPLOAD_BYTES).err(),
            Some(SubmitError::validation("Please select a file to upload"))
        );
    }

    #[test]
    fn test_small_limit_message_names_fraction() {
        assert_eq!(
            validate_upload(Some(FakeFile(600_000.0)), 512 * 1024).err(),
            Some(SubmitError::validation("File size exceeds 0.5MB limit"))
        );
    }

    #[test]
    fn test_validate_job_description() {
        assert!(validate_job_description("Senior Rust engineer").is_ok());
        assert_eq!(
            validate_job_description(" \t\n ").err(),
            Some(SubmitError::validation("Job description is required"))
        );
    }

    #[tokio::test]
    async fn test_oversized_upload_sends_nothing() {
        let control = Control::default();
        let sent = Cell::new(false);
        let sent_ref = &sent;

        let result = submit_upload(&control, Some(FakeFile(6_000_000.0)), DEFAULT_MAX_UPLOAD_BYTES, |_| async move {
            sent_ref.set(true);
            Ok(jane())
        })
        .await;

        assert_eq!(result, Err(SubmitError::validation("File size exceeds 5MB limit")));
        assert!(!sent.get());
        assert!(control.released());
    }

    #[tokio::test]
    async fn test_missing_file_sends_nothing() {
        let control = Control::default();
        let sent = Cell::new(false);
        let sent_ref = &sent;

        let result = submit_upload::<_, FakeFile, _, _>(&control, None, DEFAULT_MAX_UPLOAD_BYTES, |_| async move {
            sent_ref.set(true);
            Ok(jane())
        })
        .await;

        assert_eq!(result, Err(SubmitError::validation("Please select a file to upload")));
        assert!(!sent.get());
        assert!(control.released());
    }

    #[tokio::test]
    async fn test_upload_success_releases_control() {
        let control = Control::default();

        let result = submit_upload(&control, Some(FakeFile(1024.0)), DEFAULT_MAX_UPLOAD_BYTES, |_| async {
            Ok(jane())
        })
        .await;

        assert_eq!(result, Ok(jane()));
        assert!(control.released());
    }

    #[tokio::test]
    async fn test_upload_transport_failure_releases_control() {
        let control = Control::default();

        let result = submit_upload(&control, Some(FakeFile(1024.0)), DEFAULT_MAX_UPLOAD_BYTES, |_| async {
            Err(SubmitError::Transport("Failed to fetch".to_string()))
        })
        .await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
        assert!(control.released());
    }

    #[tokio::test]
    async fn test_blank_description_sends_nothing() {
        let control = Control::default();
        let sent = Cell::new(false);
        let sent_ref = &sent;

        let result = submit_shortlist(&control, "   ".to_string(), |_| async move {
            sent_ref.set(true);
            Ok(ShortlistResult { message: String::new(), job_description_id: None, top_candidates: Vec::new() })
        })
        .await;

        assert_eq!(result, Err(SubmitError::validation("Job description is required")));
        assert!(!sent.get());
        assert!(control.released());
    }

    #[tokio::test]
    async fn test_shortlist_sends_text_unchanged() {
        let control = Control::default();
        let seen = RefCell::new(String::new());

        let result = submit_shortlist(&control, "  Rust engineer  ".to_string(), |text| {
            *seen.borrow_mut() = text;
            async {
                Ok(ShortlistResult {
                    message: "Shortlisted 3 candidates".to_string(),
                    job_description_id: Some(1),
                    top_candidates: Vec::new(),
                })
            }
        })
        .await;

        assert_eq!(seen.borrow().as_str(), "  Rust engineer  ");
        assert_eq!(result.map(|r| r.message), Ok("Shortlisted 3 candidates".to_string()));
        assert!(control.released());
    }

    #[tokio::test]
    async fn test_server_error_releases_control() {
        let control = Control::default();

        let result = run_submission(&control, || async {
            Err::<(), _>(SubmitError::Server { status: 500, message: None })
        })
        .await;

        assert!(result.is_err());
        assert!(control.released());
    }
}
