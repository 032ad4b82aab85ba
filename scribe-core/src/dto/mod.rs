//! Request and response envelopes for the vendor API
//!
//! Thin serde shapes that match the vendor's wire format. Domain types model
//! the objects themselves; these model the requests that create them and the
//! envelopes they come back in.

pub mod assistant;
pub mod chat;
pub mod thread;

use serde::{Deserialize, Serialize};

/// List envelope the vendor wraps around collection responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

/// Deletion confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    pub id: String,
    pub deleted: bool,
}
