//! Uploaded file domain types

use serde::{Deserialize, Serialize};

/// Handle to a file uploaded to the vendor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileHandle {
    pub id: String,
    pub filename: String,
    pub bytes: u64,
    pub purpose: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
