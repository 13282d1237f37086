//! Frontend Models
//!
//! Data structures matching the screening server's JSON replies.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Successful resume upload (matches `/upload` reply)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub candidate_id: u64,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub years_experience: Option<f64>,
}

impl UploadResult {
    pub fn candidate_href(&self) -> String {
        candidate_href(self.candidate_id)
    }

    /// Name for the success panel
    pub fn display_name(&self) -> &str {
        present(&self.full_name).unwrap_or("Unknown")
    }

    /// Email for the success panel
    pub fn display_email(&self) -> &str {
        present(&self.email).unwrap_or("N/A")
    }

    pub fn display_years(&self) -> String {
        format_years(self.years_experience)
    }
}

/// 409 reply when the resume's email already belongs to a candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateError {
    pub error: String,
    pub existing_candidate_id: u64,
    pub existing_candidate_name: String,
}

impl DuplicateError {
    pub fn existing_href(&self) -> String {
        candidate_href(self.existing_candidate_id)
    }
}

/// Candidate fields echoed back by the ranking step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub years_experience: Option<f64>,
}

/// One entry of `top_candidates` in a shortlist reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: u64,
    #[serde(default)]
    pub similarity_score: f64,
    #[serde(default)]
    pub data: CandidateSummary,
}

impl RankedCandidate {
    pub fn candidate_href(&self) -> String {
        candidate_href(self.candidate_id)
    }

    pub fn display_name(&self) -> &str {
        present(&self.data.full_name).unwrap_or("Unknown")
    }

    /// Similarity as a percentage, e.g. `87.3%`
    pub fn score_percent(&self) -> String {
        format!("{:.1}%", self.similarity_score * 100.0)
    }
}

/// Successful shortlist request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistResult {
    pub message: String,
    #[serde(default)]
    pub job_description_id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_ranked")]
    pub top_candidates: Vec<RankedCandidate>,
}

/// Decode `top_candidates`, dropping entries that do not parse.
///
/// The shortlist is already stored when the server replies, so a bad ranking
/// entry must not turn the reply into a failure.
pub(crate) fn deserialize_ranked<'de, D>(deserializer: D) -> Result<Vec<RankedCandidate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                log::warn!("[Shortlist] Skipping malformed ranked candidate: {}", e);
                None
            }
        })
        .collect())
}

impl ShortlistResult {
    pub fn job_description_href(&self) -> Option<String> {
        self.job_description_id.map(|id| format!("/job_description/{}", id))
    }
}

// ========================
// Delete Targets
// ========================

/// Kinds of records a delete control can remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteKind {
    Candidate,
    Shortlist,
    JobDescription,
}

impl DeleteKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "candidate" => Some(Self::Candidate),
            "shortlist" => Some(Self::Shortlist),
            "job_description" => Some(Self::JobDescription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Shortlist => "shortlist",
            Self::JobDescription => "job_description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteTargetError {
    #[error("unknown delete type {0:?}")]
    UnknownKind(String),
    #[error("delete control has no data-type")]
    MissingKind,
    #[error("delete control has no data-id")]
    MissingId,
    #[error("invalid delete id {0:?}")]
    InvalidId(String),
}

/// What a delete control points at, read from its data attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub kind: DeleteKind,
    pub id: u64,
    pub name: String,
}

impl DeleteTarget {
    /// Build from raw `data-type`, `data-id` and `data-name` values
    pub fn from_attributes(
        kind: Option<&str>,
        id: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, DeleteTargetError> {
        let kind_raw = kind.ok_or(DeleteTargetError::MissingKind)?;
        let kind = DeleteKind::parse(kind_raw)
            .ok_or_else(|| DeleteTargetError::UnknownKind(kind_raw.to_string()))?;
        let id_raw = id.map(str::trim).filter(|v| !v.is_empty()).ok_or(DeleteTargetError::MissingId)?;
        let id = id_raw
            .parse::<u64>()
            .map_err(|_| DeleteTargetError::InvalidId(id_raw.to_string()))?;
        let name = name
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or("this item")
            .to_string();
        Ok(Self { kind, id, name })
    }

    pub fn endpoint(&self) -> String {
        match self.kind {
            DeleteKind::Shortlist => format!("/shortlist/{}/delete", self.id),
            kind => format!("/{}/{}/delete", kind.as_str(), self.id),
        }
    }

    pub fn confirm_message(&self) -> String {
        format!(
            "Are you sure you want to delete {}? This action cannot be undone.",
            self.name
        )
    }
}

pub fn candidate_href(id: u64) -> String {
    format!("/candidate/{}", id)
}

/// Treats empty strings like missing values
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Experience in years; missing or zero shows as `0`
pub fn format_years(years: Option<f64>) -> String {
    match years {
        Some(y) if y != 0.0 && y.is_finite() => format!("{}", y),
        _ => "0".to_string(),
    }
}
