//! Agent module - the analyst agent logic.
//!
//! The agent follows a "tools in a loop" pattern, driven by an explicit
//! state machine:
//! 1. Build context with the system prompt, the question, and any
//!    pre-fetched search results
//! 2. Call the LLM with the available tools (AwaitingModel)
//! 3. If the model requests tool calls, execute them and feed the results
//!    back (ExecutingTool)
//! 4. Repeat until the model produces a final answer (Done) or the
//!    iteration cap is hit (an error)

mod agent_loop;
mod prompt;

pub use agent_loop::{Agent, AgentRun};
pub use prompt::build_system_prompt;
