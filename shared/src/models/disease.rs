//! Plant disease classes and care recommendations

use serde::{Deserialize, Serialize};

/// Leaf conditions the disease classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseClass {
    Healthy,
    EarlyBlight,
    LateBlight,
    LeafSpot,
    PowderyMildew,
}

impl DiseaseClass {
    /// All classes, in model output order.
    pub const ALL: [DiseaseClass; 5] = [
        DiseaseClass::Healthy,
        DiseaseClass::EarlyBlight,
        DiseaseClass::LateBlight,
        DiseaseClass::LeafSpot,
        DiseaseClass::PowderyMildew,
    ];

    /// Fixed care recommendations for this condition.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            DiseaseClass::Healthy => &[
                "Continue current practices",
                "Monitor regularly for any signs of disease",
                "Maintain good air circulation",
            ],
            DiseaseClass::EarlyBlight => &[
                "Remove infected leaves",
                "Apply fungicide",
                "Improve air circulation",
                "Avoid overhead watering",
            ],
            DiseaseClass::LateBlight => &[
                "Remove and destroy infected plants",
                "Apply copper-based fungicide",
                "Improve drainage",
                "Space plants properly",
            ],
            DiseaseClass::LeafSpot => &[
                "Remove infected leaves",
                "Apply appropriate fungicide",
                "Avoid overhead watering",
                "Maintain proper spacing",
            ],
            DiseaseClass::PowderyMildew => &[
                "Improve air circulation",
                "Apply sulfur-based fungicide",
                "Remove infected parts",
                "Water at base of plants",
            ],
        }
    }
}

impl std::fmt::Display for DiseaseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseClass::Healthy => write!(f, "Healthy"),
            DiseaseClass::EarlyBlight => write!(f, "Early Blight"),
            DiseaseClass::LateBlight => write!(f, "Late Blight"),
            DiseaseClass::LeafSpot => write!(f, "Leaf Spot"),
            DiseaseClass::PowderyMildew => write!(f, "Powdery Mildew"),
        }
    }
}

/// Basic facts about the analyzed image after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Width and height in pixels.
    pub size: (u32, u32),
    /// Pixel mode, e.g. "RGB".
    pub mode: String,
    /// Container format of the upload, e.g. "JPEG", or "Unknown".
    pub format: String,
}

/// Classifier output for one uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseasePrediction {
    pub disease: String,
    pub confidence: f64,
    pub recommendations: Vec<String>,
    pub image_info: ImageInfo,
}
