//! Web search tool: adapts the LangSearch client for the agent.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::search::LangSearchClient;

use super::Tool;

/// Search the web via LangSearch.
pub struct WebSearchTool {
    search: Arc<LangSearchClient>,
    count: u32,
}

impl WebSearchTool {
    pub fn new(search: Arc<LangSearchClient>, count: u32) -> Self {
        Self { search, count }
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the internet for current information. Returns the top results with titles and summaries. Input should be a search query string."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "count": {
                    "type": "integer",
                    "description": "Number of results to request (default: 5)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = args["query"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;
        let count = args["count"].as_u64().map(|c| c as u32).unwrap_or(self.count);

        // Search failures come back in-band as diagnostic text, so this
        // only errs on malformed arguments.
        Ok(self.search.search(query, count).await)
    }
}
