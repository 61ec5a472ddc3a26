//! Question submission handler.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, Json};
use uuid::Uuid;

use crate::sanitize;

use super::types::{AskRequest, AskResponse};
use super::{error_response, AppState};

/// `POST /api/ask` - run the full pipeline for one question.
///
/// Search failures come back embedded in the digest text; agent/LLM
/// failures are fatal to this submission only and map to a 500.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, Response> {
    let question = req.question.trim().to_string();
    if question.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Question must not be empty".to_string(),
            "invalid_request_error",
        ));
    }

    // One submission at a time; later requests wait in FIFO order.
    let _guard = state.submission_lock.lock().await;

    tracing::info!(question = %question, "Processing submission");

    // Fetch the display digest once; the agent reuses it as context.
    let search_results = state
        .search
        .search(&question, state.config.search_count)
        .await;

    let run = state
        .agent
        .run(&question, Some(&search_results))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Agent run failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Analysis failed: {}", e),
                "agent_error",
            )
        })?;

    let answer = sanitize::clean(&run.answer);

    Ok(Json(AskResponse {
        id: Uuid::new_v4(),
        question,
        search_results,
        answer,
        transcript: run.transcript,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::new(
            "together-key".to_string(),
            "langsearch-key".to_string(),
            "test/model".to_string(),
        )))
    }

    async fn rejection(question: &str) -> Response {
        ask(
            State(test_state()),
            Json(AskRequest {
                question: question.to_string(),
            }),
        )
        .await
        .err()
        .expect("expected rejection")
    }

    #[tokio::test]
    async fn test_empty_question_rejected_with_400() {
        let resp = rejection("").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_whitespace_question_rejected_with_error_body() {
        let resp = rejection("   \n\t ").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), 4096).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["type"], "error");
        assert_eq!(json["error"]["code"], "invalid_request_error");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("empty"));
    }
}
