//! Soil readings and soil health scoring

use serde::{Deserialize, Serialize};

/// The five soil and climate parameters tracked by the platform.
///
/// The variant order is observable: crop scoring, health reports, and
/// advisory output all iterate in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilParameter {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    Rainfall,
}

impl SoilParameter {
    /// All parameters in canonical order.
    pub const ALL: [SoilParameter; 5] = [
        SoilParameter::Nitrogen,
        SoilParameter::Phosphorus,
        SoilParameter::Potassium,
        SoilParameter::Ph,
        SoilParameter::Rainfall,
    ];

    /// Field name as it appears in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilParameter::Nitrogen => "nitrogen",
            SoilParameter::Phosphorus => "phosphorus",
            SoilParameter::Potassium => "potassium",
            SoilParameter::Ph => "ph",
            SoilParameter::Rainfall => "rainfall",
        }
    }

    /// Human-facing name used in messages shown to farmers.
    pub fn display_name(&self) -> &'static str {
        match self {
            SoilParameter::Nitrogen => "Nitrogen",
            SoilParameter::Phosphorus => "Phosphorus",
            SoilParameter::Potassium => "Potassium",
            SoilParameter::Ph => "pH",
            SoilParameter::Rainfall => "Rainfall",
        }
    }

    /// Healthy interval for this parameter across all crops.
    ///
    /// Not the same thing as a crop's optimal range: these bound what counts
    /// as healthy soil regardless of what is grown on it.
    pub fn health_threshold(&self) -> HealthThreshold {
        match self {
            SoilParameter::Nitrogen => HealthThreshold { low: 30.0, high: 160.0 },
            SoilParameter::Phosphorus => HealthThreshold { low: 30.0, high: 100.0 },
            SoilParameter::Potassium => HealthThreshold { low: 30.0, high: 100.0 },
            SoilParameter::Ph => HealthThreshold { low: 5.5, high: 7.5 },
            SoilParameter::Rainfall => HealthThreshold { low: 75.0, high: 300.0 },
        }
    }

    /// Fixed remediation advice for a low health score on this parameter.
    pub fn advisory(&self) -> &'static str {
        match self {
            SoilParameter::Nitrogen => {
                "Add nitrogen-rich fertilizers or organic matter like manure"
            }
            SoilParameter::Phosphorus => "Apply phosphate fertilizers or bone meal",
            SoilParameter::Potassium => "Use potash fertilizers or add wood ash",
            SoilParameter::Ph => "Adjust soil pH using lime (if acidic) or sulfur (if alkaline)",
            SoilParameter::Rainfall => "Consider irrigation or drought-resistant crops",
        }
    }
}

impl std::fmt::Display for SoilParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One soil sample as submitted with a recommendation request.
///
/// N, P, K in mg/kg, pH on the 0-14 scale, rainfall in mm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SoilReading {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl SoilReading {
    pub fn value(&self, parameter: SoilParameter) -> f64 {
        match parameter {
            SoilParameter::Nitrogen => self.nitrogen,
            SoilParameter::Phosphorus => self.phosphorus,
            SoilParameter::Potassium => self.potassium,
            SoilParameter::Ph => self.ph,
            SoilParameter::Rainfall => self.rainfall,
        }
    }
}

/// Population-level healthy interval for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthThreshold {
    pub low: f64,
    pub high: f64,
}

/// Per-parameter health scores on the 0-100 scale.
///
/// Scores are not clamped: a reading far past the high threshold legally
/// produces a negative score, and callers surface that as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterScores {
    pub nitrogen: i32,
    pub phosphorus: i32,
    pub potassium: i32,
    pub ph: i32,
    pub rainfall: i32,
}

impl ParameterScores {
    pub fn get(&self, parameter: SoilParameter) -> i32 {
        match parameter {
            SoilParameter::Nitrogen => self.nitrogen,
            SoilParameter::Phosphorus => self.phosphorus,
            SoilParameter::Potassium => self.potassium,
            SoilParameter::Ph => self.ph,
            SoilParameter::Rainfall => self.rainfall,
        }
    }
}

/// Health score below which a parameter earns a remediation advisory.
pub const ADVISORY_THRESHOLD: i32 = 70;

/// Score one value against its parameter's healthy interval.
///
/// Inside the interval (inclusive) the score is 100. Below it the score
/// falls linearly to 0 at zero. Above it the score falls linearly and keeps
/// falling past zero. Truncates toward zero, not rounded.
fn health_score(parameter: SoilParameter, value: f64) -> i32 {
    let HealthThreshold { low, high } = parameter.health_threshold();
    if value < low {
        (value / low * 100.0) as i32
    } else if value > high {
        (100.0 - (value - high) / high * 100.0) as i32
    } else {
        100
    }
}

/// Score a reading against the population-level healthy intervals.
pub fn score_soil_health(reading: &SoilReading) -> ParameterScores {
    ParameterScores {
        nitrogen: health_score(SoilParameter::Nitrogen, reading.nitrogen),
        phosphorus: health_score(SoilParameter::Phosphorus, reading.phosphorus),
        potassium: health_score(SoilParameter::Potassium, reading.potassium),
        ph: health_score(SoilParameter::Ph, reading.ph),
        rainfall: health_score(SoilParameter::Rainfall, reading.rainfall),
    }
}

/// Overall soil health: floor of the mean of the five parameter scores.
pub fn overall_health_score(scores: &ParameterScores) -> i32 {
    let sum: i32 = SoilParameter::ALL.iter().map(|p| scores.get(*p)).sum();
    (f64::from(sum) / SoilParameter::ALL.len() as f64).floor() as i32
}

/// Remediation advisories for every parameter scoring below
/// [`ADVISORY_THRESHOLD`], in canonical parameter order.
pub fn soil_recommendations(scores: &ParameterScores) -> Vec<String> {
    SoilParameter::ALL
        .iter()
        .filter(|p| scores.get(**p) < ADVISORY_THRESHOLD)
        .map(|p| p.advisory().to_string())
        .collect()
}

/// Complete soil health report for one reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilHealthReport {
    pub overall_score: i32,
    pub parameter_scores: ParameterScores,
    pub recommendations: Vec<String>,
}

impl SoilHealthReport {
    pub fn for_reading(reading: &SoilReading) -> Self {
        let parameter_scores = score_soil_health(reading);
        SoilHealthReport {
            overall_score: overall_health_score(&parameter_scores),
            recommendations: soil_recommendations(&parameter_scores),
            parameter_scores,
        }
    }
}
