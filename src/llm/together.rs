//! Together AI chat-completions client (OpenAI-compatible).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{ChatMessage, LlmClient};

const TOGETHER_BASE_URL: &str = "https://api.together.xyz/v1";

/// Client for the Together AI chat-completions endpoint.
pub struct TogetherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Response envelope (the subset we read).
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

impl TogetherClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: TOGETHER_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (test servers).
    #[cfg(test)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl LlmClient for TogetherClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> anyhow::Result<ChatMessage> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut body = json!({
            "model": model,
            "messages": messages,
            "temperature": 0.7,
        });
        if let Some(tools) = tools {
            if !tools.is_empty() {
                body["tools"] = json!(tools);
            }
        }

        tracing::debug!(model, url = %url, "Together chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Together API error");
            anyhow::bail!("Together API error: {} - {}", status, text);
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| anyhow::anyhow!("Together API returned no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[tokio::test]
    async fn test_chat_completion_parses_assistant_message() {
        use axum::{routing::post, Json, Router};

        let app = Router::new().route(
            "/chat/completions",
            post(|| async {
                Json(json!({
                    "choices": [{
                        "message": {"role": "assistant", "content": "**Verdict:** fine"},
                        "finish_reason": "stop"
                    }]
                }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let client = TogetherClient::with_base_url("key".to_string(), format!("http://{}", addr));
        let msg = client
            .chat_completion("m", &[ChatMessage::user("q")], None)
            .await
            .unwrap();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content.as_deref(), Some("**Verdict:** fine"));
    }

    #[tokio::test]
    async fn test_error_status_propagates() {
        use axum::{http::StatusCode, routing::post, Router};

        let app = Router::new().route(
            "/chat/completions",
            post(|| async { (StatusCode::UNAUTHORIZED, "bad key") }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let client = TogetherClient::with_base_url("key".to_string(), format!("http://{}", addr));
        let err = client
            .chat_completion("m", &[ChatMessage::user("q")], None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
