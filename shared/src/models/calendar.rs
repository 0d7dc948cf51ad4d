//! Growing season calendar

use serde::{Deserialize, Serialize};

/// Cropping seasons of the Indian agricultural calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Season a calendar month (1-12) falls in.
    ///
    /// June through October is Kharif, November through March is Rabi, the
    /// remainder (April, May) is Zaid.
    pub fn for_month(month: u32) -> Season {
        match month {
            6..=10 => Season::Kharif,
            1..=3 | 11 | 12 => Season::Rabi,
            _ => Season::Zaid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much rain a season's typical crops demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RainfallRequirement {
    High,
    Moderate,
    Low,
}

/// One season's entry in the crop calendar.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonInfo {
    pub name: Season,
    pub months: &'static str,
    pub crops: &'static [&'static str],
    pub rainfall_requirement: RainfallRequirement,
}

/// The fixed three-season calendar.
pub const CROP_CALENDAR: [SeasonInfo; 3] = [
    SeasonInfo {
        name: Season::Kharif,
        months: "June-October",
        crops: &["Rice", "Maize", "Soybean", "Cotton"],
        rainfall_requirement: RainfallRequirement::High,
    },
    SeasonInfo {
        name: Season::Rabi,
        months: "November-March",
        crops: &["Wheat", "Barley", "Peas", "Mustard"],
        rainfall_requirement: RainfallRequirement::Moderate,
    },
    SeasonInfo {
        name: Season::Zaid,
        months: "March-June",
        crops: &["Watermelon", "Muskmelon", "Cucumber"],
        rainfall_requirement: RainfallRequirement::Low,
    },
];
