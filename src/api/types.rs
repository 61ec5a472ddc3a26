//! API request and response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to ask a question.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    /// The user's question
    pub question: String,
}

/// Answer to one submitted question.
#[derive(Debug, Clone, Serialize)]
pub struct AskResponse {
    /// Unique submission identifier
    pub id: Uuid,

    /// The question as processed
    pub question: String,

    /// The search digest fetched for display
    pub search_results: String,

    /// Sanitized final answer
    pub answer: String,

    /// Tool invocations and results recorded during the agent run
    pub transcript: Vec<TranscriptEntry>,
}

/// A single entry in the agent transcript.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// Timestamp (ISO 8601)
    pub timestamp: String,

    /// Entry type
    pub entry_type: EntryType,

    /// Content of the entry
    pub content: String,
}

impl TranscriptEntry {
    pub fn new(entry_type: EntryType, content: String) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            entry_type,
            content,
        }
    }
}

/// Types of transcript entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    /// Tool is being called
    ToolCall,
    /// Tool returned a result
    ToolResult,
    /// Agent produced its final response
    Response,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_serializes_snake_case() {
        let entry = TranscriptEntry::new(EntryType::ToolCall, "x".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["entry_type"], "tool_call");
    }
}
