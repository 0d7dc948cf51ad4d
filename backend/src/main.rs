//! Agri Advisory Platform - Backend Server
//!
//! Advisory API for farmers: soil-based crop recommendations, soil health
//! reports, and a plant disease detection pipeline.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::CropTable;

mod config;
mod error;
mod handlers;
mod inference;
mod routes;
mod services;

pub use config::Config;

use inference::{DiseaseModel, StubDiseaseModel};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub crop_table: Arc<CropTable>,
    pub disease_model: Arc<dyn DiseaseModel>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Agri Advisory Platform Server");
    tracing::info!("Environment: {}", config.environment);

    // Build the static reference tables once; they are read-only for the
    // process lifetime and shared across all requests.
    let crop_table = Arc::new(CropTable::standard());
    tracing::info!("Loaded crop table with {} crops", crop_table.len());

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        crop_table,
        disease_model: Arc::new(StubDiseaseModel::default()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let max_upload = state.config.upload.max_image_bytes;

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to the Agri Advisory Platform API"
}
