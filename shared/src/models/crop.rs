//! Crop profiles and suitability scoring

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::soil::{SoilParameter, SoilReading};

/// Optimal interval for one parameter of one crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalRange {
    pub min: f64,
    pub max: f64,
}

impl OptimalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Bounds are inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Closeness of a value to this range, in [0, 1].
    ///
    /// 1.0 inside the range, falling linearly to 0 at one span's distance
    /// outside it. A degenerate zero-span range scores 0 for anything
    /// outside it.
    pub fn closeness(&self, value: f64) -> f64 {
        if self.contains(value) {
            return 1.0;
        }
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        let distance = (value - self.min).abs().min((value - self.max).abs());
        (1.0 - distance / span).max(0.0)
    }
}

/// Optimal growing conditions for a single crop.
#[derive(Debug, Clone, Serialize)]
pub struct CropProfile {
    name: &'static str,
    /// One range per parameter, in [`SoilParameter::ALL`] order.
    ranges: [OptimalRange; 5],
}

impl CropProfile {
    pub const fn new(name: &'static str, ranges: [OptimalRange; 5]) -> Self {
        Self { name, ranges }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn range(&self, parameter: SoilParameter) -> OptimalRange {
        self.ranges[parameter as usize]
    }

    /// Suitability of a reading for this crop: the mean closeness across
    /// the five parameters, in [0, 1]. Exactly 1.0 when every parameter
    /// sits inside its optimal range.
    pub fn suitability(&self, reading: &SoilReading) -> f64 {
        let total: f64 = SoilParameter::ALL
            .iter()
            .map(|&p| self.range(p).closeness(reading.value(p)))
            .sum();
        total / SoilParameter::ALL.len() as f64
    }
}

/// Suitability score for one crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropScore {
    pub crop: String,
    pub score: f64,
}

/// Ranking result: the best match plus the next three options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub recommended: CropScore,
    pub alternatives: Vec<CropScore>,
}

/// Lookup failed: the crop is not in the table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown crop: {0}")]
pub struct UnknownCrop(pub String);

/// Ranking failed: the table holds no crops.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("crop table is empty")]
pub struct EmptyTable;

/// The fixed set of crops the recommender knows about.
///
/// Authored once at startup and shared read-only for the process lifetime.
/// Iteration order is the authored order and is observable through ranking
/// tie-breaks.
#[derive(Debug, Clone)]
pub struct CropTable {
    profiles: Vec<CropProfile>,
}

impl CropTable {
    /// The standard ten-crop table.
    pub fn standard() -> Self {
        const fn r(min: f64, max: f64) -> OptimalRange {
            OptimalRange::new(min, max)
        }
        // Ranges per crop: nitrogen, phosphorus, potassium, ph, rainfall.
        Self {
            profiles: vec![
                CropProfile::new(
                    "Rice",
                    [r(60.0, 100.0), r(40.0, 80.0), r(40.0, 80.0), r(5.5, 6.5), r(150.0, 300.0)],
                ),
                CropProfile::new(
                    "Wheat",
                    [r(100.0, 140.0), r(50.0, 90.0), r(50.0, 90.0), r(6.0, 7.0), r(75.0, 150.0)],
                ),
                CropProfile::new(
                    "Maize",
                    [r(80.0, 120.0), r(40.0, 70.0), r(30.0, 60.0), r(5.8, 7.0), r(100.0, 200.0)],
                ),
                CropProfile::new(
                    "Sugarcane",
                    [r(120.0, 160.0), r(60.0, 100.0), r(60.0, 100.0), r(6.0, 7.5), r(150.0, 250.0)],
                ),
                CropProfile::new(
                    "Cotton",
                    [r(80.0, 120.0), r(30.0, 60.0), r(40.0, 80.0), r(6.0, 7.5), r(100.0, 180.0)],
                ),
                CropProfile::new(
                    "Groundnut",
                    [r(40.0, 80.0), r(30.0, 60.0), r(30.0, 60.0), r(6.0, 6.5), r(80.0, 120.0)],
                ),
                CropProfile::new(
                    "Pulses",
                    [r(30.0, 60.0), r(40.0, 70.0), r(30.0, 50.0), r(6.0, 7.0), r(80.0, 150.0)],
                ),
                CropProfile::new(
                    "Potato",
                    [r(100.0, 140.0), r(50.0, 80.0), r(50.0, 90.0), r(5.5, 6.5), r(100.0, 180.0)],
                ),
                CropProfile::new(
                    "Tomato",
                    [r(80.0, 120.0), r(40.0, 80.0), r(40.0, 80.0), r(6.0, 7.0), r(80.0, 150.0)],
                ),
                CropProfile::new(
                    "Soybean",
                    [r(50.0, 90.0), r(40.0, 70.0), r(40.0, 70.0), r(6.0, 7.0), r(100.0, 180.0)],
                ),
            ],
        }
    }

    pub fn profiles(&self) -> &[CropProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn lookup(&self, crop: &str) -> Result<&CropProfile, UnknownCrop> {
        self.profiles
            .iter()
            .find(|p| p.name == crop)
            .ok_or_else(|| UnknownCrop(crop.to_string()))
    }

    /// Score every crop and rank descending by suitability.
    ///
    /// The sort is stable, so equal scores keep the authored table order.
    /// The top entry is the recommendation; the next three are alternatives.
    pub fn rank(&self, reading: &SoilReading) -> Result<RankedRecommendation, EmptyTable> {
        let mut scores: Vec<CropScore> = self
            .profiles
            .iter()
            .map(|profile| CropScore {
                crop: profile.name.to_string(),
                score: profile.suitability(reading),
            })
            .collect();

        scores.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut ranked = scores.into_iter();
        let recommended = ranked.next().ok_or(EmptyTable)?;
        let alternatives = ranked.take(3).collect();

        Ok(RankedRecommendation {
            recommended,
            alternatives,
        })
    }
}

impl Default for CropTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(n: f64, p: f64, k: f64, ph: f64, rain: f64) -> SoilReading {
        SoilReading {
            nitrogen: n,
            phosphorus: p,
            potassium: k,
            ph,
            rainfall: rain,
        }
    }

    #[test]
    fn closeness_inside_range_is_one() {
        let range = OptimalRange::new(40.0, 80.0);
        assert_eq!(range.closeness(40.0), 1.0);
        assert_eq!(range.closeness(60.0), 1.0);
        assert_eq!(range.closeness(80.0), 1.0);
    }

    #[test]
    fn closeness_falls_linearly_outside() {
        let range = OptimalRange::new(40.0, 80.0);
        // 20 below min on a span of 40: 1 - 20/40 = 0.5
        assert_eq!(range.closeness(20.0), 0.5);
        // 20 above max: same distance, same score
        assert_eq!(range.closeness(100.0), 0.5);
        // a full span away or more floors at 0
        assert_eq!(range.closeness(0.0), 0.0);
        assert_eq!(range.closeness(200.0), 0.0);
    }

    #[test]
    fn closeness_of_degenerate_range_is_zero_outside() {
        let range = OptimalRange::new(50.0, 50.0);
        assert_eq!(range.closeness(50.0), 1.0);
        assert_eq!(range.closeness(51.0), 0.0);
    }

    #[test]
    fn table_has_ten_crops_in_authored_order() {
        let table = CropTable::standard();
        let names: Vec<&str> = table.profiles().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "Rice",
                "Wheat",
                "Maize",
                "Sugarcane",
                "Cotton",
                "Groundnut",
                "Pulses",
                "Potato",
                "Tomato",
                "Soybean",
            ]
        );
    }

    #[test]
    fn lookup_known_and_unknown() {
        let table = CropTable::standard();
        assert_eq!(table.lookup("Rice").unwrap().name(), "Rice");
        let err = table.lookup("Durian").unwrap_err();
        assert_eq!(err, UnknownCrop("Durian".to_string()));
    }

    #[test]
    fn perfect_reading_scores_one() {
        let table = CropTable::standard();
        let rice = table.lookup("Rice").unwrap();
        // Every parameter inside Rice's optimal ranges.
        assert_eq!(rice.suitability(&reading(80.0, 60.0, 60.0, 6.2, 200.0)), 1.0);
    }

    #[test]
    fn suitability_stays_in_unit_interval() {
        let table = CropTable::standard();
        let extreme = reading(200.0, 0.0, 200.0, 14.0, 0.0);
        for profile in table.profiles() {
            let score = profile.suitability(&extreme);
            assert!((0.0..=1.0).contains(&score), "{}: {score}", profile.name());
        }
    }

    #[test]
    fn rank_puts_rice_first_for_rice_conditions() {
        let table = CropTable::standard();
        let ranked = table.rank(&reading(80.0, 60.0, 60.0, 6.2, 200.0)).unwrap();
        assert_eq!(ranked.recommended.crop, "Rice");
        assert_eq!(ranked.recommended.score, 1.0);
        assert_eq!(ranked.alternatives.len(), 3);
    }

    #[test]
    fn rank_is_sorted_descending() {
        let table = CropTable::standard();
        let ranked = table.rank(&reading(100.0, 55.0, 50.0, 6.4, 120.0)).unwrap();
        let mut previous = ranked.recommended.score;
        for alternative in &ranked.alternatives {
            assert!(alternative.score <= previous);
            previous = alternative.score;
        }
    }

    #[test]
    fn ties_keep_authored_table_order() {
        // A reading maximally far from every range scores 0.0 for all ten
        // crops, so the ranking must reproduce the authored order.
        let table = CropTable::standard();
        let hopeless = reading(1e9, 1e9, 1e9, 1e9, 1e9);
        let ranked = table.rank(&hopeless).unwrap();
        assert_eq!(ranked.recommended.crop, "Rice");
        assert_eq!(ranked.recommended.score, 0.0);
        let names: Vec<&str> = ranked.alternatives.iter().map(|c| c.crop.as_str()).collect();
        assert_eq!(names, vec!["Wheat", "Maize", "Sugarcane"]);
    }

    #[test]
    fn empty_table_is_rejected() {
        let table = CropTable { profiles: Vec::new() };
        let result = table.rank(&reading(80.0, 60.0, 60.0, 6.2, 200.0));
        assert_eq!(result.unwrap_err(), EmptyTable);
    }
}
