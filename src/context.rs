//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser;
use crate::config::ClientConfig;
use crate::models::UploadResult;
use crate::store::{store_add_recent_upload, UploadsState, UploadsStore};

/// Page-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Client configuration loaded at start-up
    config: StoredValue<ClientConfig>,
    /// Recent uploads for this page session
    pub uploads: UploadsStore,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let uploads = Store::new(UploadsState::with_capacity(config.recent_uploads_capacity));
        Self {
            config: StoredValue::new(config),
            uploads,
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Record a finished upload, stamped with the local time
    pub fn add_recent_upload(&self, result: &UploadResult) {
        store_add_recent_upload(&self.uploads, result, browser::local_time_string());
    }
}
