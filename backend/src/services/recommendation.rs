//! Crop recommendation service
//!
//! Validates a soil reading, ranks every crop in the static table against
//! it, and attaches an independent soil health report.

use serde::Serialize;
use std::sync::Arc;

use crate::error::AppResult;
use shared::{validate_soil_reading, CropTable, SoilHealthReport, SoilReading};

/// Crop recommendation service over the shared crop table
#[derive(Clone)]
pub struct RecommendationService {
    table: Arc<CropTable>,
}

/// One alternative crop option
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeCrop {
    pub crop: String,
    pub confidence: f64,
}

/// Full crop recommendation response
#[derive(Debug, Clone, Serialize)]
pub struct CropRecommendationResponse {
    pub recommended_crop: String,
    pub confidence: f64,
    pub alternative_crops: Vec<AlternativeCrop>,
    pub soil_health: SoilHealthReport,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(table: Arc<CropTable>) -> Self {
        Self { table }
    }

    /// Validate the reading, then rank crops and score soil health.
    ///
    /// Validation runs first; nothing is scored for a rejected reading.
    pub fn recommend(&self, reading: SoilReading) -> AppResult<CropRecommendationResponse> {
        validate_soil_reading(&reading)?;

        let ranked = self.table.rank(&reading)?;
        let soil_health = SoilHealthReport::for_reading(&reading);

        tracing::info!(
            recommended = %ranked.recommended.crop,
            confidence = ranked.recommended.score,
            soil_health = soil_health.overall_score,
            "computed crop recommendation"
        );

        Ok(CropRecommendationResponse {
            recommended_crop: ranked.recommended.crop,
            confidence: ranked.recommended.score,
            alternative_crops: ranked
                .alternatives
                .into_iter()
                .map(|alt| AlternativeCrop {
                    crop: alt.crop,
                    confidence: alt.score,
                })
                .collect(),
            soil_health,
        })
    }
}
