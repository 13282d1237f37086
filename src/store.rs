//! Upload History Store
//!
//! Uses Leptos reactive_stores so the recent list re-renders per field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::UploadResult;
use crate::recent::{RecentUpload, RecentUploads};

/// Page-session state shared by the upload panel and its recent list
#[derive(Clone, Debug, Default, Store)]
pub struct UploadsState {
    /// Newest-first upload history, bounded
    pub recent: RecentUploads,
}

impl UploadsState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { recent: RecentUploads::with_capacity(capacity) }
    }
}

/// Type alias for the store
pub type UploadsStore = Store<UploadsState>;

// ========================
// Store Helper Functions
// ========================

/// Prepend an upload, evicting the oldest entry past capacity
pub fn store_add_recent_upload(store: &UploadsStore, result: &UploadResult, uploaded_at: String) {
    if let Some(evicted) = store.recent().write().push(result, uploaded_at) {
        log::debug!("[Recent] Evicted candidate {} from recent uploads", evicted.candidate_id);
    }
}

/// Snapshot of the recent entries, newest first
pub fn store_recent_entries(store: &UploadsStore) -> Vec<RecentUpload> {
    store.recent().read().iter().cloned().collect()
}

pub fn store_recent_is_empty(store: &UploadsStore) -> bool {
    store.recent().read().is_empty()
}
