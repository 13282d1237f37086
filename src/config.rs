//! Client Configuration
//!
//! Read once at start-up from an optional JSON block in the host page:
//!
//! ```html
//! <script id="app-config" type="application/json">{"max_upload_bytes": 5242880}</script>
//! ```
//!
//! Missing fields fall back to the defaults below.

use log::LevelFilter;
use serde::Deserialize;

use crate::recent::DEFAULT_RECENT_CAPACITY;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// 5 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

const BYTES_PER_MIB: u64 = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub upload_url: String,
    pub shortlist_url: String,
    pub max_upload_bytes: u64,
    pub recent_uploads_capacity: usize,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            upload_url: "/upload".to_string(),
            shortlist_url: "/shortlist".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            recent_uploads_capacity: DEFAULT_RECENT_CAPACITY,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults when the page carries no config block
    pub fn from_document(document: &web_sys::Document) -> Result<Self, serde_json::Error> {
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => Self::from_json(&element.text_content().unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Upload limit as shown to users, e.g. `5` or `0.5`
    pub fn max_upload_megabytes(&self) -> String {
        megabytes_label(self.max_upload_bytes)
    }
}

/// Byte count in MiB with at most two decimals and no trailing zeros
pub fn megabytes_label(bytes: u64) -> String {
    if bytes % BYTES_PER_MIB == 0 {
        return (bytes / BYTES_PER_MIB).to_string();
    }
    let label = format!("{:.2}", bytes as f64 / BYTES_PER_MIB as f64);
    label.trim_end_matches('0').trim_end_matches('.').to_string()
}
