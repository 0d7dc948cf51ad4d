//! Disease detection service
//!
//! Validates and decodes an uploaded leaf image, normalizes it to the model
//! input shape, and runs the classifier behind the [`DiseaseModel`] seam.

use image::{imageops::FilterType, ImageFormat};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::inference::{DiseaseModel, MODEL_INPUT_SIZE};
use shared::{DiseasePrediction, ImageInfo};

/// Disease detection service wrapping the classifier
#[derive(Clone)]
pub struct DiseaseDetectionService {
    model: Arc<dyn DiseaseModel>,
}

impl DiseaseDetectionService {
    /// Create a new DiseaseDetectionService instance
    pub fn new(model: Arc<dyn DiseaseModel>) -> Self {
        Self { model }
    }

    /// Validate, decode, normalize, and classify an uploaded image.
    ///
    /// Rejections (wrong content type, empty body, undecodable bytes) are
    /// client faults and never reach the model.
    pub fn detect(&self, content_type: Option<&str>, bytes: &[u8]) -> AppResult<DiseasePrediction> {
        let content_type = content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(AppError::Validation {
                field: "file".to_string(),
                message: "File must be an image (JPEG or PNG)".to_string(),
            });
        }

        if bytes.is_empty() {
            return Err(AppError::Validation {
                field: "file".to_string(),
                message: "Empty file".to_string(),
            });
        }

        let format = image::guess_format(bytes)
            .map(format_name)
            .unwrap_or("Unknown");

        let decoded = image::load_from_memory(bytes).map_err(|e| AppError::Validation {
            field: "file".to_string(),
            message: format!("Error processing image: {e}"),
        })?;

        // Normalize to the model input shape: RGB, 224x224.
        let normalized = decoded
            .resize_exact(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE, FilterType::Triangle)
            .to_rgb8();

        let request_id = Uuid::new_v4();
        let classification = self.model.classify(&normalized);

        tracing::info!(
            %request_id,
            disease = %classification.class,
            confidence = classification.confidence,
            "classified leaf image"
        );

        Ok(DiseasePrediction {
            disease: classification.class.to_string(),
            confidence: classification.confidence,
            recommendations: classification
                .class
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            image_info: ImageInfo {
                size: (normalized.width(), normalized.height()),
                mode: "RGB".to_string(),
                format: format.to_string(),
            },
        })
    }
}

/// Display name for an upload's container format.
fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WebP",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Tiff => "TIFF",
        _ => "Unknown",
    }
}
