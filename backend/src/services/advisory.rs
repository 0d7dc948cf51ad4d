//! General agronomy advisory service
//!
//! Static soil-care tips and the seasonal crop calendar.

use serde::Serialize;

use shared::{Season, SeasonInfo, CROP_CALENDAR};

/// Fixed soil-care tip list served to all farmers.
pub const SOIL_HEALTH_TIPS: [&str; 10] = [
    "Maintain proper soil pH between 6.0 and 7.0 for most crops",
    "Add organic matter to improve soil structure and fertility",
    "Practice crop rotation to prevent nutrient depletion",
    "Use cover crops to protect soil during off-seasons",
    "Test soil regularly to monitor nutrient levels",
    "Avoid over-tilling to maintain soil structure",
    "Implement proper drainage to prevent waterlogging",
    "Use mulch to retain moisture and suppress weeds",
    "Apply balanced fertilizers based on soil test results",
    "Maintain adequate soil moisture through proper irrigation",
];

/// Soil-care tips response
#[derive(Debug, Clone, Serialize)]
pub struct SoilHealthTips {
    pub tips: Vec<&'static str>,
}

/// Crop calendar response
#[derive(Debug, Clone, Serialize)]
pub struct CropCalendarResponse {
    pub current_season: Season,
    pub seasons: &'static [SeasonInfo],
}

/// Advisory service for static agronomy guidance
#[derive(Clone, Copy, Default)]
pub struct AdvisoryService;

impl AdvisoryService {
    /// Create a new AdvisoryService instance
    pub fn new() -> Self {
        Self
    }

    /// The fixed soil-care tip list.
    pub fn soil_health_tips(&self) -> SoilHealthTips {
        SoilHealthTips {
            tips: SOIL_HEALTH_TIPS.to_vec(),
        }
    }

    /// The three-season calendar, with the season the given month falls in.
    pub fn crop_calendar(&self, month: u32) -> CropCalendarResponse {
        CropCalendarResponse {
            current_season: Season::for_month(month),
            seasons: &CROP_CALENDAR,
        }
    }
}
