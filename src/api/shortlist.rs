//! Shortlist Requests
//!
//! Job-description submission to `/shortlist`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use super::{post, RequestBody};
use crate::error::SubmitError;
use crate::models::{deserialize_ranked, RankedCandidate, ShortlistResult};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `job_description=<text>` form body
pub fn encode_job_description(text: &str) -> String {
    format!("job_description={}", utf8_percent_encode(text, URI_COMPONENT))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ShortlistReply {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    job_description_id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_ranked")]
    top_candidates: Vec<RankedCandidate>,
}

pub(crate) fn classify_shortlist(status: u16, reply: ShortlistReply) -> Result<ShortlistResult, SubmitError> {
    if !(200..300).contains(&status) || reply.error.is_some() {
        return Err(SubmitError::Server { status, message: reply.error });
    }
    Ok(ShortlistResult {
        message: reply.message.unwrap_or_default(),
        job_description_id: reply.job_description_id,
        top_candidates: reply.top_candidates,
    })
}

pub async fn request_shortlist(url: &str, job_description: &str) -> Result<ShortlistResult, SubmitError> {
    let body = RequestBody::UrlEncoded(encode_job_description(job_description));
    let reply = post(url, body).await?;
    classify_shortlist(reply.status, reply.decode()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_uri_component() {
        assert_eq!(
            encode_job_description("Rust dev & ops (remote)"),
            "job_description=Rust%20dev%20%26%20ops%20(remote)"
        );
        assert_eq!(encode_job_description("a=b+c\n"), "job_description=a%3Db%2Bc%0A");
        assert_eq!(encode_job_description("café"), "job_description=caf%C3%A9");
    }

    #[test]
    fn test_success_with_ranking() {
        let reply: ShortlistReply = serde_json::from_str(
            r#"{
                "message": "Shortlisted 2 candidates",
                "job_description_id": 4,
                "top_candidates": [
                    {"candidate_id": 1, "similarity_score": 0.91, "data": {"full_name": "Ada"}},
                    {"candidate_id": 2, "similarity_score": 0.5, "data": {}}
                ]
            }"#,
        )
        .unwrap();
        let result = classify_shortlist(200, reply).unwrap();
        assert_eq!(result.message, "Shortlisted 2 candidates");
        assert_eq!(result.top_candidates.len(), 2);
        assert_eq!(result.job_description_href().as_deref(), Some("/job_description/4"));
    }

    #[test]
    fn test_malformed_ranked_entries_are_skipped() {
        let reply: ShortlistReply = serde_json::from_str(
            r#"{
                "message": "Shortlisted 3 candidates",
                "top_candidates": [
                    {"candidate_id": 1, "similarity_score": 0.8},
                    {"candidate_id": 2, "similarity_score": null},
                    {"similarity_score": 0.4},
                    "garbage"
                ]
            }"#,
        )
        .unwrap();
        let result = classify_shortlist(200, reply).unwrap();
        assert_eq!(result.message, "Shortlisted 3 candidates");
        assert_eq!(result.top_candidates.len(), 1);
        assert_eq!(result.top_candidates[0].candidate_id, 1);
    }

    #[test]
    fn test_null_ranking_is_empty() {
        let reply: ShortlistReply =
            serde_json::from_str(r#"{"message": "Shortlisted 0 candidates", "top_candidates": null}"#).unwrap();
        assert!(classify_shortlist(200, reply).unwrap().top_candidates.is_empty());
    }

    #[test]
    fn test_message_only_reply() {
        let reply: ShortlistReply = serde_json::from_str(r#"{"message": "Shortlisted 0 candidates"}"#).unwrap();
        let result = classify_shortlist(200, reply).unwrap();
        assert!(result.top_candidates.is_empty());
        assert_eq!(result.job_description_href(), None);
    }

    #[test]
    fn test_error_reply() {
        let reply: ShortlistReply = serde_json::from_str(r#"{"error": "Job description is required"}"#).unwrap();
        let err = classify_shortlist(400, reply).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Server { status: 400, message: Some("Job description is required".to_string()) }
        );
    }
}
