use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::downstream::DownstreamClient;
use crate::ui;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let downstream = DownstreamClient::new(&config.downstream.chat_url);

    info!(
        name: "relay.config.loaded",
        chat_url = %downstream.chat_url(),
        "Downstream configuration loaded"
    );

    let state = AppState { downstream };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server running"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the application router.
///
/// Split out from [`start_server`] so tests can drive the router directly
/// with their own [`AppState`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/chat", post(api_chat))
        // The original relay enables CORS globally; same here.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handler
// ─────────────────────────────────────────────────────────────────────────────

/// Index page handler.
async fn index_handler() -> impl IntoResponse {
    Html(ui::page::chat_page())
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for the chat relay.
#[derive(Debug, Deserialize)]
struct ChatRequest {
    /// User message content.
    #[serde(default)]
    message: Option<String>,
}

/// Response from the chat relay.
#[derive(Debug, Serialize)]
struct ChatResponse {
    /// Downstream reply text.
    response: String,
}

/// POST /api/chat - Forward one message to the downstream service.
///
/// Missing or empty `message` is a 400 (the original's falsy check treats
/// `""` as absent). Every downstream failure collapses into a bare 500.
async fn api_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let request_id = uuid::Uuid::new_v4().to_string();

    let Some(message) = req.message.filter(|m| !m.is_empty()) else {
        tracing::warn!(request_id = %request_id, "Chat request missing message");
        return Err(StatusCode::BAD_REQUEST);
    };

    tracing::info!(
        request_id = %request_id,
        message_length = message.len(),
        "Received chat request"
    );

    match state.downstream.send(&message).await {
        Ok(response) => {
            tracing::info!(
                request_id = %request_id,
                response_length = response.len(),
                "Relayed downstream reply"
            );
            Ok(Json(ChatResponse { response }))
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Error fetching bot response"
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
