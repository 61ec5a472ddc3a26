//! Core agent loop implementation.

use std::sync::Arc;

use crate::api::types::{EntryType, TranscriptEntry};
use crate::config::Config;
use crate::llm::{ChatMessage, LlmClient, ToolCall, TogetherClient};
use crate::search::LangSearchClient;
use crate::tools::{ToolRegistry, WebSearchTool};

use super::prompt::build_system_prompt;

/// Outcome of one agent run: the final answer plus the ordered record of
/// tool invocations and results that produced it.
#[derive(Debug)]
pub struct AgentRun {
    pub answer: String,
    pub transcript: Vec<TranscriptEntry>,
}

/// Loop state for one run. `Failed` is the `Err` arm of `run`'s result;
/// it never needs a variant here.
enum LoopState {
    /// Waiting for the model's next message.
    AwaitingModel,
    /// The model requested these tool calls; execute them in order.
    ExecutingTool(Vec<ToolCall>),
    /// The model produced its final answer.
    Done(String),
}

/// The analyst agent: an LLM that may search the web before answering.
pub struct Agent {
    model: String,
    max_iterations: usize,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

impl Agent {
    /// Create a new agent from the service configuration.
    pub fn new(config: &Config) -> Self {
        let llm = Arc::new(TogetherClient::new(config.together_api_key.clone()));
        let search = Arc::new(LangSearchClient::new(config.langsearch_api_key.clone()));

        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(WebSearchTool::new(search, config.search_count)));

        Self {
            model: config.model.clone(),
            max_iterations: config.max_iterations,
            llm,
            tools,
        }
    }

    /// Create an agent with an explicit LLM client and tool set (tests).
    pub fn with_parts(
        model: String,
        max_iterations: usize,
        llm: Arc<dyn LlmClient>,
        tools: ToolRegistry,
    ) -> Self {
        Self {
            model,
            max_iterations,
            llm,
            tools,
        }
    }

    /// Answer a question, optionally seeded with already-fetched search
    /// results so the model need not repeat the same query.
    ///
    /// LLM/provider errors propagate; they abort this run only.
    pub async fn run(
        &self,
        question: &str,
        search_context: Option<&str>,
    ) -> anyhow::Result<AgentRun> {
        let mut transcript = Vec::new();

        let user_content = match search_context {
            Some(digest) => format!(
                "{}\n\nWeb search results already gathered for this question:\n{}",
                question, digest
            ),
            None => question.to_string(),
        };

        let system_prompt = build_system_prompt(&self.tools);
        let mut messages = vec![
            ChatMessage::system(system_prompt),
            ChatMessage::user(user_content),
        ];

        let tool_schemas = self.tools.get_tool_schemas();

        let mut state = LoopState::AwaitingModel;

        // The iteration cap bounds both model calls and tool batches, so a
        // model that keeps requesting searches cannot loop forever.
        for iteration in 0..self.max_iterations {
            state = match state {
                LoopState::AwaitingModel => {
                    tracing::debug!("Agent iteration {}", iteration + 1);

                    let response = self
                        .llm
                        .chat_completion(&self.model, &messages, Some(&tool_schemas))
                        .await?;

                    let has_tool_calls = response
                        .tool_calls
                        .as_ref()
                        .is_some_and(|calls| !calls.is_empty());

                    if has_tool_calls {
                        let calls = response.tool_calls.clone().unwrap_or_default();
                        messages.push(response);
                        LoopState::ExecutingTool(calls)
                    } else if let Some(content) = response.content {
                        LoopState::Done(content)
                    } else {
                        anyhow::bail!("LLM returned empty response")
                    }
                }

                LoopState::ExecutingTool(calls) => {
                    for call in &calls {
                        transcript.push(TranscriptEntry::new(
                            EntryType::ToolCall,
                            format!(
                                "Calling tool: {} with args: {}",
                                call.function.name, call.function.arguments
                            ),
                        ));

                        let result = self.execute_tool_call(call).await;
                        let result_str = match result {
                            Ok(output) => output,
                            Err(e) => format!("Error: {}", e),
                        };

                        transcript.push(TranscriptEntry::new(
                            EntryType::ToolResult,
                            truncate_for_log(&result_str, 1000),
                        ));

                        messages.push(ChatMessage::tool(call.id.clone(), result_str));
                    }

                    LoopState::AwaitingModel
                }

                LoopState::Done(answer) => {
                    transcript.push(TranscriptEntry::new(
                        EntryType::Response,
                        truncate_for_log(&answer, 2000),
                    ));
                    return Ok(AgentRun { answer, transcript });
                }
            };
        }

        // A Done state reached exactly at the cap still counts.
        if let LoopState::Done(answer) = state {
            transcript.push(TranscriptEntry::new(
                EntryType::Response,
                truncate_for_log(&answer, 2000),
            ));
            return Ok(AgentRun { answer, transcript });
        }

        Err(anyhow::anyhow!(
            "Max iterations ({}) reached without a final answer",
            self.max_iterations
        ))
    }

    /// Execute a single tool call. Tool failures are reported back to the
    /// model as text, not raised.
    async fn execute_tool_call(&self, tool_call: &ToolCall) -> anyhow::Result<String> {
        let args: serde_json::Value =
            serde_json::from_str(&tool_call.function.arguments).unwrap_or(serde_json::Value::Null);

        self.tools.execute(&tool_call.function.name, args).await
    }
}

/// Truncate a string for transcript purposes, respecting char boundaries.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len).collect();
        format!("{}... [truncated]", head)
    }
}
