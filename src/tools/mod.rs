//! Tools the agent can invoke during a run.
//!
//! A tool is a named, described capability with a JSON-schema'd argument
//! object. The registry hands the schemas to the LLM and dispatches the
//! model's tool calls back to the matching implementation.

mod web;

pub use web::WebSearchTool;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

/// A capability the agent can invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as exposed to the LLM.
    fn name(&self) -> &str;

    /// Natural-language description; the model reads this to decide when
    /// to invoke the tool.
    fn description(&self) -> &str;

    /// JSON schema for the tool's arguments.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// Registry of available tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    /// All registered tools, for prompt building.
    pub fn list_tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Tool schemas in the OpenAI function-call format.
    pub fn get_tool_schemas(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters_schema(),
                    }
                })
            })
            .collect()
    }

    /// Execute a tool by name.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<String> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| anyhow::anyhow!("Unknown tool: {}", name))?;

        tool.execute(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl Tool for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the input back."
        }

        fn parameters_schema(&self) -> Value {
            json!({"type": "object", "properties": {"text": {"type": "string"}}})
        }

        async fn execute(&self, args: Value) -> anyhow::Result<String> {
            Ok(args["text"].as_str().unwrap_or_default().to_string())
        }
    }

    #[test]
    fn test_schemas_use_function_call_format() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo));

        let schemas = registry.get_tool_schemas();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0]["type"], "function");
        assert_eq!(schemas[0]["function"]["name"], "echo");
        assert!(schemas[0]["function"]["parameters"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_tool_is_error() {
        let registry = ToolRegistry::new();
        let err = registry.execute("nope", json!({})).await.unwrap_err();
        assert!(err.to_string().contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_dispatch_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Echo));

        let out = registry
            .execute("echo", json!({"text": "hi"}))
            .await
            .unwrap();
        assert_eq!(out, "hi");
    }
}
