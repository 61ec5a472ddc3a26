//! LLM client abstraction and chat-completion wire types.
//!
//! The wire types are the OpenAI-compatible subset Together AI speaks:
//! a message list with roles, optional tool calls on assistant messages,
//! and tool results echoed back as `role: "tool"` messages.

mod together;

pub use together::TogetherClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message role in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    /// A tool result message, answering the tool call with the given id.
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
        }
    }
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_type")]
    pub call_type: String,
    pub function: FunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

/// The function half of a tool call: a name plus JSON-encoded arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// Client seam for chat-completion providers.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one chat completion and return the assistant message.
    ///
    /// `tools` is an optional list of OpenAI-format function schemas the
    /// model may call.
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[serde_json::Value]>,
    ) -> anyhow::Result<ChatMessage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serialization_skips_none_fields() {
        let msg = ChatMessage::user("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
        assert!(json.get("tool_calls").is_none());
        assert!(json.get("tool_call_id").is_none());
    }

    #[test]
    fn test_tool_call_deserializes_without_type() {
        let call: ToolCall = serde_json::from_str(
            r#"{"id": "call_1", "function": {"name": "web_search", "arguments": "{\"query\": \"q\"}"}}"#,
        )
        .unwrap();
        assert_eq!(call.call_type, "function");
        assert_eq!(call.function.name, "web_search");
    }
}
