//! HTTP API: the form page, the ask endpoint, and health.

mod ask;
pub mod types;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::agent::Agent;
use crate::config::Config;
use crate::search::LangSearchClient;

use types::HealthResponse;

const INDEX_HTML: &str = include_str!("index.html");

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub agent: Agent,
    pub search: LangSearchClient,
    /// Serializes submissions: one question is processed at a time.
    pub submission_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let agent = Agent::new(&config);
        let search = LangSearchClient::new(config.langsearch_api_key.clone());
        Self {
            config,
            agent,
            search,
            submission_lock: Mutex::new(()),
        }
    }
}

/// Minimal error response matching OpenAI's format.
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    r#type: String,
    code: Option<String>,
}

pub(crate) fn error_response(status: StatusCode, message: String, code: &str) -> Response {
    let body = ErrorResponse {
        error: ErrorBody {
            message,
            r#type: "error".to_string(),
            code: Some(code.to_string()),
        },
    };
    (status, Json(body)).into_response()
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/ask", post(ask::ask))
        .route("/api/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server and serve until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
