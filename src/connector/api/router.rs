use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::domain::TemplateBundle;

use super::container::Container;
use super::controller::{ChatController, ChatResponse, TemplateController};
use super::error::ApiError;

/// Builds the gateway router: `POST /template`, `POST /chat` and `GET /health`.
///
/// Cross-origin requests are allowed from any origin for GET/POST/OPTIONS with
/// only the `Content-Type` request header.
pub fn build_router(container: Arc<Container>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    axum::Router::new()
        .route("/template", post(template))
        .route("/chat", post(chat))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}

async fn health() -> &'static str {
    "ok"
}

async fn template(
    State(container): State<Arc<Container>>,
    body: Bytes,
) -> Result<Json<TemplateBundle>, ApiError> {
    let span = info_span!("template", request_id = %Uuid::new_v4());
    TemplateController::new(&container)
        .template(&body)
        .instrument(span)
        .await
        .map(Json)
}

async fn chat(
    State(container): State<Arc<Container>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());
    ChatController::new(&container)
        .chat(&body)
        .instrument(span)
        .await
        .map(Json)
}
