//! HTTP handlers for static advisory endpoints

use axum::Json;
use chrono::{Datelike, Utc};

use crate::services::advisory::{AdvisoryService, CropCalendarResponse, SoilHealthTips};

/// Get the fixed soil-care tip list
pub async fn get_soil_health_tips() -> Json<SoilHealthTips> {
    let service = AdvisoryService::new();
    Json(service.soil_health_tips())
}

/// Get the crop calendar with the current season
pub async fn get_crop_calendar() -> Json<CropCalendarResponse> {
    let service = AdvisoryService::new();
    Json(service.crop_calendar(Utc::now().month()))
}
