//! # Analyst Assistant
//!
//! A web-search grounded question-answering service.
//!
//! This library provides:
//! - An HTTP API (plus a single embedded form page) for submitting questions
//! - A LangSearch web-search client producing a compact result digest
//! - A tool-calling agent loop over the Together AI chat-completions API
//!
//! ## Architecture
//!
//! Each submission is a sequential pipeline:
//! 1. Receive a question via the form / JSON API
//! 2. Fetch a web-search digest for display
//! 3. Run the agent with that digest as context; the model may call the
//!    `web_search` tool for follow-up queries before answering
//! 4. Strip any leaked `<think>` reasoning markup and render the answer
//!
//! ## Example
//!
//! ```rust,ignore
//! use analyst_assistant::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(&config);
//! let run = agent.run("Is coffee healthy?", None).await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod llm;
pub mod sanitize;
pub mod search;
pub mod tools;

pub use config::Config;
