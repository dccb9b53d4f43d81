//! HTTP gateway for writeflow.
//!
//! Exposes the three writing actions as streaming endpoints plus
//! health and root info routes. Each action request seeds a fresh
//! conversation, runs the agent loop, and delivers the result as an
//! SSE stream of framed events.
//!
//! Built on Axum. Requests are fully independent: the shared state
//! holds only the immutable agent and config, so there is no
//! cross-request locking.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    response::Json,
    response::sse::{Event as SseEvent, Sse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;
use tower_http::cors::CorsLayer;
use tracing::info;

use writeflow_agent::{AgentLoop, stream_events};
use writeflow_core::action::WriteAction;
use writeflow_core::conversation::ConversationState;

/// Shared application state for the gateway.
///
/// Everything here is immutable after startup; per-request state
/// lives in each request's own `ConversationState`.
pub struct GatewayState {
    pub config: writeflow_config::AppConfig,
    pub agent: Arc<AgentLoop>,
    pub pacing: Duration,
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.gateway.allowed_origins);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/edit", post(edit_handler))
        .route("/api/improve", post(improve_handler))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS restricted to the configured frontend origins.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

/// Start the gateway HTTP server.
pub async fn start(config: writeflow_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let host = config.gateway.host.clone();
    let port = config.gateway.port;
    let addr = format!("{host}:{port}");

    let provider = writeflow_providers::router::build_from_config(&config);
    let tools = Arc::new(writeflow_tools::default_registry());

    let agent = Arc::new(
        AgentLoop::new(
            provider,
            &config.default_model,
            config.default_temperature,
            tools,
        )
        .with_max_tokens(config.default_max_tokens),
    );

    let pacing = Duration::from_millis(config.stream.pacing_ms);
    let state = Arc::new(GatewayState {
        config,
        agent,
        pacing,
    });

    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        name: "writeflow",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    agent_ready: bool,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        agent_ready: state.agent.is_ready().await,
    })
}

#[derive(Deserialize)]
struct GenerateRequest {
    prompt: String,
    #[serde(default)]
    context: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TextRequest {
    content: String,
    #[serde(default)]
    context: HashMap<String, String>,
}

async fn generate_handler(
    State(state): State<SharedState>,
    Json(payload): Json<GenerateRequest>,
) -> Sse<impl futures::Stream<Item = Result<SseEvent, Infallible>>> {
    run_action(state, WriteAction::Generate, payload.prompt, payload.context)
}

async fn edit_handler(
    State(state): State<SharedState>,
    Json(payload): Json<TextRequest>,
) -> Sse<impl futures::Stream<Item = Result<SseEvent, Infallible>>> {
    run_action(state, WriteAction::Edit, payload.content, payload.context)
}

async fn improve_handler(
    State(state): State<SharedState>,
    Json(payload): Json<TextRequest>,
) -> Sse<impl futures::Stream<Item = Result<SseEvent, Infallible>>> {
    run_action(state, WriteAction::Improve, payload.content, payload.context)
}

/// Seed a fresh conversation, run the loop, and stream the result.
///
/// Frames are plain `data: <json>` lines: the event type lives inside
/// the JSON payload, never in an SSE `event:` field.
fn run_action(
    state: SharedState,
    action: WriteAction,
    subject: String,
    context: HashMap<String, String>,
) -> Sse<impl futures::Stream<Item = Result<SseEvent, Infallible>>> {
    info!(action = %action, subject_len = subject.len(), "Action request");

    let agent = state.agent.clone();
    let max_iterations = state.config.max_iterations;

    let rx = stream_events(
        action,
        async move {
            let mut conversation = ConversationState::new(action, subject, context, max_iterations);
            agent.process(&mut conversation).await
        },
        state.pacing,
    );

    let stream = ReceiverStream::new(rx)
        .map(move |event| Ok(SseEvent::default().data(event.wire_json(action))));

    Sse::new(stream)
}
