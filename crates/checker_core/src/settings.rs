use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;
pub const MIN_DESCRIPTION_CHARS: usize = 50;
pub const TOAST_DISMISS_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation limits and timings for the upload page.
///
/// Every field is optional when deserialized; missing fields keep the
/// defaults that match the server's own limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckerSettings {
    pub accepted_mime_type: String,
    pub max_file_bytes: u64,
    pub min_description_chars: usize,
    pub toast_dismiss_ms: u64,
}

impl Default for CheckerSettings {
    fn default() -> Self {
        Self {
            accepted_mime_type: PDF_MIME_TYPE.to_string(),
            max_file_bytes: MAX_FILE_BYTES,
            min_description_chars: MIN_DESCRIPTION_CHARS,
            toast_dismiss_ms: TOAST_DISMISS_MS,
        }
    }
}

impl CheckerSettings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn toast_dismiss_after(&self) -> Duration {
        Duration::from_millis(self.toast_dismiss_ms)
    }

    /// Ceiling expressed in whole mebibytes for user-facing text.
    pub fn max_file_mib(&self) -> u64 {
        self.max_file_bytes / (1024 * 1024)
    }
}
