//! Route definitions for the Agri Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop recommendation
        .nest("/crops", crop_routes())
        // Disease detection
        .nest("/disease", disease_routes())
        // Static advisories
        .nest("/advisory", advisory_routes())
}

/// Crop recommendation routes
fn crop_routes() -> Router<AppState> {
    Router::new().route("/recommend", post(handlers::recommend_crop))
}

/// Disease detection routes
fn disease_routes() -> Router<AppState> {
    Router::new().route("/detect", post(handlers::detect_disease))
}

/// Static advisory routes
fn advisory_routes() -> Router<AppState> {
    Router::new()
        .route("/soil-health-tips", get(handlers::get_soil_health_tips))
        .route("/crop-calendar", get(handlers::get_crop_calendar))
}
