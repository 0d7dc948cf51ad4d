//! HTTP handlers for plant disease detection endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::services::disease::DiseaseDetectionService;
use crate::AppState;
use shared::DiseasePrediction;

/// Detect plant disease from an uploaded leaf image.
///
/// Expects a multipart form with a `file` field holding the image.
pub async fn detect_disease(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DiseasePrediction>> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::Validation {
            field: "file".to_string(),
            message: format!("Invalid multipart upload: {e}"),
        }
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(|ct| ct.to_string());
        let bytes = field.bytes().await.map_err(|e| AppError::Validation {
            field: "file".to_string(),
            message: format!("Failed to read upload: {e}"),
        })?;

        let service = DiseaseDetectionService::new(state.disease_model.clone());
        let prediction = service.detect(content_type.as_deref(), &bytes)?;
        return Ok(Json(prediction));
    }

    Err(AppError::Validation {
        field: "file".to_string(),
        message: "Missing file field in upload".to_string(),
    })
}
