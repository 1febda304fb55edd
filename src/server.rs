//! Web server for the body fat calculator.
//!
//! Serves the calculator page (GET renders the blank form, POST runs the
//! pipeline and re-renders with the result or error), a small JSON API for
//! the same computation and the static assets for the page.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::services::ServeDir;

use crate::calculator::evaluate;
use crate::domain::MeasurementInput;
use crate::error::PageError;
use crate::page::PageRenderer;
use crate::ranges::{RANGES, RangeTable};

/// Shared application state. Read-only after startup.
pub struct AppState {
    pub page: PageRenderer,
}

// === JSON Response Types ===

#[derive(Serialize)]
pub struct EstimateResponse {
    pub result: String,
    pub body_fat_pct: f64,
    pub show_weight: bool,
}

#[derive(Serialize)]
pub struct EstimateErrorResponse {
    pub error: String,
    pub kind: &'static str,
    pub show_weight: bool,
}

// === Router Setup ===

/// Creates the application router.
pub fn create_router(state: Arc<AppState>, static_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/estimate", post(estimate))
        .route("/api/ranges", get(get_ranges))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Runs the web server.
pub async fn run_server(
    state: Arc<AppState>,
    port: u16,
    static_dir: PathBuf,
) -> anyhow::Result<()> {
    let app = create_router(state, static_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    println!("Server running at http://localhost:{}", port);
    log::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

// === Page Handlers ===

/// GET / - Blank calculator form.
async fn show_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    state.page.render_blank().map(Html).map_err(render_failure)
}

/// POST / - Evaluate the submission and re-render the form around the outcome.
async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MeasurementInput>,
) -> Result<Html<String>, StatusCode> {
    let evaluation = evaluate(&form);
    state
        .page
        .render_evaluation(&form, &evaluation)
        .map(Html)
        .map_err(render_failure)
}

// === API Handlers ===

/// POST /api/estimate - Same pipeline as the form, JSON in and out.
async fn estimate(Json(input): Json<MeasurementInput>) -> Response {
    let evaluation = evaluate(&input);

    match evaluation.outcome {
        Ok(estimate) => Json(EstimateResponse {
            result: estimate.display(),
            body_fat_pct: estimate.body_fat_pct,
            show_weight: evaluation.show_weight,
        })
        .into_response(),
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(EstimateErrorResponse {
                error: e.to_string(),
                kind: e.kind(),
                show_weight: evaluation.show_weight,
            }),
        )
            .into_response(),
    }
}

/// GET /api/ranges - The range table used for validation.
async fn get_ranges() -> Json<RangeTable> {
    Json(RANGES)
}

// === Helper Functions ===

fn render_failure(e: PageError) -> StatusCode {
    log::error!("Failed to render page: {}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}
