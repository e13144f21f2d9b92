//! HTTP endpoints for the analyzer service using axum.
//!
//! Endpoints:
//! - POST /analyze-symptoms - full inference pipeline for one report
//! - GET  /health           - liveness probe with registry counts
//!
//! The client application is served from another origin, so CORS stays
//! permissive.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::error;
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::context::AnalyzerContext;
use crate::encode::SymptomReport;
use crate::error::AnalyzerError;
use crate::interpret::DiseaseCandidate;
use crate::recommend::Recommendation;

/// Shared immutable server state
pub type SharedContext = Arc<AnalyzerContext>;

/// Height and weight are not collected by this endpoint, so the BMI field
/// is a fixed placeholder.
const BMI_MESSAGE: &str = "Please enter your height and weight for BMI calculation.";

/// Build the axum router with all endpoints
pub fn router(context: SharedContext) -> Router {
    Router::new()
        .route("/analyze-symptoms", post(analyze_symptoms))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(context)
}

// ── Request / Response types ────────────────────────────────────────

/// Response body of `POST /analyze-symptoms`
#[derive(Serialize)]
pub struct AnalyzeResponse {
    /// Candidate diseases in label-registry order
    pub diseases: Vec<DiseaseCandidate>,
    /// Localized recommendations in candidate order
    pub medicines: Vec<Recommendation>,
    /// Static placeholder, see [`BMI_MESSAGE`]
    pub bmi_recommendation: BmiRecommendation,
}

/// Placeholder BMI advice
#[derive(Serialize)]
pub struct BmiRecommendation {
    /// Human-readable message
    pub message: &'static str,
}

/// Response body of `GET /health`
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always "ok" once the service is up
    pub status: &'static str,
    /// Number of diseases the classifier can report
    pub diseases: usize,
    /// Number of known symptom tokens
    pub vocabulary: usize,
}

// ── Handlers ────────────────────────────────────────────────────────

async fn analyze_symptoms(
    State(context): State<SharedContext>,
    Json(report): Json<SymptomReport>,
) -> Result<Json<AnalyzeResponse>, ServerError> {
    let analysis = context.analyze(&report)?;
    Ok(Json(AnalyzeResponse {
        diseases: analysis.diseases,
        medicines: analysis.medicines,
        bmi_recommendation: BmiRecommendation {
            message: BMI_MESSAGE,
        },
    }))
}

async fn health(State(context): State<SharedContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        diseases: context.labels().len(),
        vocabulary: context.vocabulary().len(),
    })
}

// ── Error mapping ───────────────────────────────────────────────────

/// Handler-level error wrapper mapping analyzer errors to HTTP responses
#[derive(Debug)]
pub struct ServerError(AnalyzerError);

/// JSON body returned on error
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: u16,
}

impl From<AnalyzerError> for ServerError {
    fn from(e: AnalyzerError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Everything reachable from a handler is an internal failure; bad
        // request bodies are rejected by the Json extractor before this.
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        error!("request failed: {}", self.0);
        let body = ErrorBody {
            error: self.0.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

// ── Tests ───────────────────────────────────────────────────────────
