//! HTTP API for Luggage Pin
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /generate - Candidates for `{"digits": "..."}`
//! - GET /generate/{digits} - Candidates for a path segment

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{CombinationGenerator, InputSanitizer};
use crate::types::{GenerationOutput, PinError};

/// App state
#[derive(Debug, Default)]
pub struct AppState {
    pub generator: CombinationGenerator,
    pub sanitizer: InputSanitizer,
    pub requests_served: AtomicU64,
}

/// Generate request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free text; non-digits are stripped
    pub digits: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub requests_served: u64,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Rejected submission
#[derive(Debug)]
pub enum ApiError {
    /// Digits present but not a usable sequence
    Input(PinError),
    /// Body is not JSON or has no string `digits` field
    Body(String),
}

impl ApiError {
    /// Stable code string for the error body
    pub fn code(&self) -> &'static str {
        match self {
            Self::Input(err) => err.code(),
            Self::Body(_) => "E005_BAD_REQUEST",
        }
    }
}

impl From<PinError> for ApiError {
    fn from(err: PinError) -> Self {
        Self::Input(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.code().to_string();
        let error = match self {
            Self::Input(err) => err.to_string(),
            Self::Body(text) => text,
        };
        let body = ErrorResponse { error, code };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState::default());

    Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate_json))
        .route("/generate/:digits", get(generate_path))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        requests_served: state.requests_served.load(Ordering::Relaxed),
    })
}

/// Generate from JSON body
async fn generate_json(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerationOutput>, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        warn!(status = %rejection.status(), "rejected body: {}", rejection.body_text());
        rejection
    })?;
    generate(&state, &req.digits).map(Json)
}

/// Generate from path segment
async fn generate_path(
    State(state): State<Arc<AppState>>,
    Path(digits): Path<String>,
) -> Result<Json<GenerationOutput>, ApiError> {
    generate(&state, &digits).map(Json)
}

fn generate(state: &AppState, text: &str) -> Result<GenerationOutput, ApiError> {
    let digits = state.sanitizer.parse(text).map_err(|err| {
        warn!(code = err.code(), "rejected input: {}", err);
        err
    })?;
    let candidates = state.generator.generate(&digits);
    state.requests_served.fetch_add(1, Ordering::Relaxed);
    Ok(GenerationOutput::new(&digits, &candidates))
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "luggage pin API listening");
    println!("🔐 Luggage Pin API running on {}", addr);
    println!("  GET  /health             - Health check");
    println!("  POST /generate           - Candidates for {{\"digits\": \"208\"}}");
    println!("  GET  /generate/:digits   - Candidates for path digits");
    axum::serve(listener, router).await?;
    Ok(())
}
