//! Plant disease classifier seam
//!
//! No trained model ships with the platform yet. `StubDiseaseModel`
//! implements the same contract with randomized output so the upload and
//! advisory pipeline can be exercised end to end; a real classifier slots
//! in behind [`DiseaseModel`] without touching the scoring engine.

use image::RgbImage;
use rand::Rng;

use shared::DiseaseClass;

/// Pixel size leaf images are normalized to before inference.
pub const MODEL_INPUT_SIZE: u32 = 224;

/// Model confidence bounds for the stub.
const STUB_CONFIDENCE_MIN: f64 = 0.70;
const STUB_CONFIDENCE_MAX: f64 = 0.99;

/// One classification outcome.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub class: DiseaseClass,
    /// Normalized closeness score in [0, 1], not a statistical confidence.
    pub confidence: f64,
}

/// A leaf disease classifier over normalized RGB images.
pub trait DiseaseModel: Send + Sync {
    /// Classify a normalized `MODEL_INPUT_SIZE`-square RGB image.
    fn classify(&self, image: &RgbImage) -> Classification;
}

/// Randomized stand-in for the leaf disease classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubDiseaseModel;

impl DiseaseModel for StubDiseaseModel {
    fn classify(&self, _image: &RgbImage) -> Classification {
        let mut rng = rand::thread_rng();
        let class = DiseaseClass::ALL[rng.gen_range(0..DiseaseClass::ALL.len())];
        let confidence = rng.gen_range(STUB_CONFIDENCE_MIN..STUB_CONFIDENCE_MAX);
        Classification { class, confidence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_confidence_stays_in_declared_bounds() {
        let model = StubDiseaseModel;
        let image = RgbImage::new(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE);
        for _ in 0..200 {
            let result = model.classify(&image);
            assert!(result.confidence >= STUB_CONFIDENCE_MIN);
            assert!(result.confidence < STUB_CONFIDENCE_MAX);
        }
    }

    #[test]
    fn stub_only_reports_known_classes() {
        let model = StubDiseaseModel;
        let image = RgbImage::new(MODEL_INPUT_SIZE, MODEL_INPUT_SIZE);
        for _ in 0..200 {
            let result = model.classify(&image);
            assert!(DiseaseClass::ALL.contains(&result.class));
        }
    }
}
