//! Assistant request shapes

use serde::{Deserialize, Serialize};

/// Request to create a new assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssistant {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub tools: Vec<AssistantTool>,
}

/// Tool enabled on an assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantTool {
    #[serde(rename = "type")]
    pub kind: String,
}

impl AssistantTool {
    /// The document-retrieval tool, required for file-backed summaries.
    pub fn retrieval() -> Self {
        Self {
            kind: "retrieval".to_string(),
        }
    }
}

/// Request to attach an uploaded file to an assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachFile {
    pub file_id: String,
}
