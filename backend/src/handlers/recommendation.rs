//! HTTP handlers for crop recommendation endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::recommendation::{CropRecommendationResponse, RecommendationService};
use crate::AppState;
use shared::SoilReading;

/// Recommend crops for a soil reading
pub async fn recommend_crop(
    State(state): State<AppState>,
    Json(reading): Json<SoilReading>,
) -> AppResult<Json<CropRecommendationResponse>> {
    let service = RecommendationService::new(state.crop_table.clone());
    let response = service.recommend(reading)?;
    Ok(Json(response))
}
