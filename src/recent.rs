//! Recent Uploads
//!
//! Bounded newest-first history of successful uploads in this page session.

use std::collections::VecDeque;

use crate::models::{format_years, UploadResult};

pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// One rendered row of the recent uploads list
#[derive(Debug, Clone, PartialEq)]
pub struct RecentUpload {
    /// Insertion sequence number, unique within a list
    pub seq: u64,
    pub candidate_id: u64,
    pub name: String,
    pub email: String,
    pub years: String,
    /// Local wall-clock time the upload finished
    pub uploaded_at: String,
}

impl RecentUpload {
    pub fn href(&self) -> String {
        crate::models::candidate_href(self.candidate_id)
    }

    pub fn experience_label(&self) -> String {
        format!("{} years experience", self.years)
    }

    /// One-line summary, used as the row's tooltip
    pub fn summary(&self) -> String {
        format!("{} — {} — {}", self.name, self.email, self.experience_label())
    }
}

/// Insert-at-head list that never holds more than `capacity` entries
#[derive(Debug, Clone, PartialEq)]
pub struct RecentUploads {
    entries: VecDeque<RecentUpload>,
    capacity: usize,
    next_seq: u64,
}

impl Default for RecentUploads {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_RECENT_CAPACITY)
    }
}

impl RecentUploads {
    /// A zero capacity is raised to one
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_seq: 0,
        }
    }

    /// Prepend an upload; returns the evicted oldest entry when full
    pub fn push(&mut self, result: &UploadResult, uploaded_at: impl Into<String>) -> Option<RecentUpload> {
        let entry = RecentUpload {
            seq: self.next_seq,
            candidate_id: result.candidate_id,
            name: result
                .full_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "New Candidate".to_string()),
            email: result
                .email
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "No email provided".to_string()),
            years: format_years(result.years_experience),
            uploaded_at: uploaded_at.into(),
        };
        self.next_seq += 1;
        self.entries.push_front(entry);

        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries newest first
    pub fn iter(&self) -> impl Iterator<Item = &RecentUpload> {
        self.entries.iter()
    }
}
