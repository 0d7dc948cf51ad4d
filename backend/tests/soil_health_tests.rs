//! Soil health scoring property-based and unit tests
//!
//! Covers:
//! - threshold boundaries score 100 (inclusive)
//! - overall score is the floor of the mean of the parameter scores
//! - advisory count and order track scores below 70
//! - the formulas are intentionally unclamped outside the accepted domain

use proptest::prelude::*;
use shared::{
    overall_health_score, score_soil_health, soil_recommendations, SoilHealthReport,
    SoilParameter, SoilReading, ADVISORY_THRESHOLD,
};

/// Helper to build a reading
fn reading(n: f64, p: f64, k: f64, ph: f64, rain: f64) -> SoilReading {
    SoilReading {
        nitrogen: n,
        phosphorus: p,
        potassium: k,
        ph,
        rainfall: rain,
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate readings across the full accepted domain
fn valid_reading_strategy() -> impl Strategy<Value = SoilReading> {
    (
        0.0..=200.0f64,
        0.0..=200.0f64,
        0.0..=200.0f64,
        0.0..=14.0f64,
        0.0..=500.0f64,
    )
        .prop_map(|(n, p, k, ph, rain)| reading(n, p, k, ph, rain))
}

// ============================================================================
// Property 2: Health Report Invariants
// ============================================================================

proptest! {
    #[test]
    fn overall_is_floor_of_mean(sample in valid_reading_strategy()) {
        let scores = score_soil_health(&sample);
        let sum: i32 = SoilParameter::ALL.iter().map(|p| scores.get(*p)).sum();
        let expected = (f64::from(sum) / 5.0).floor() as i32;
        prop_assert_eq!(overall_health_score(&scores), expected);
    }

    #[test]
    fn advisory_count_matches_low_scores(sample in valid_reading_strategy()) {
        let scores = score_soil_health(&sample);
        let low = SoilParameter::ALL
            .iter()
            .filter(|p| scores.get(**p) < ADVISORY_THRESHOLD)
            .count();
        prop_assert_eq!(soil_recommendations(&scores).len(), low);
    }

    #[test]
    fn accepted_domain_scores_stay_within_scale(sample in valid_reading_strategy()) {
        // Unclamped formulas only escape [0, 100] outside the accepted
        // submission bounds.
        let scores = score_soil_health(&sample);
        for parameter in SoilParameter::ALL {
            let score = scores.get(parameter);
            prop_assert!((0..=100).contains(&score), "{}: {}", parameter, score);
        }
    }
}

// ============================================================================
// Threshold Boundary Tests
// ============================================================================

mod thresholds {
    use super::*;

    #[test]
    fn values_exactly_on_thresholds_score_100() {
        let scores = score_soil_health(&reading(30.0, 30.0, 30.0, 5.5, 75.0));
        for parameter in SoilParameter::ALL {
            assert_eq!(scores.get(parameter), 100, "{parameter}");
        }

        let scores = score_soil_health(&reading(160.0, 100.0, 100.0, 7.5, 300.0));
        for parameter in SoilParameter::ALL {
            assert_eq!(scores.get(parameter), 100, "{parameter}");
        }
    }

    #[test]
    fn below_low_threshold_is_proportional() {
        let scores = score_soil_health(&reading(15.0, 3.0, 29.0, 2.75, 15.0));
        assert_eq!(scores.nitrogen, 50); // 15/30*100
        assert_eq!(scores.phosphorus, 10); // 3/30*100
        assert_eq!(scores.potassium, 96); // 29/30*100 = 96.67 truncated
        assert_eq!(scores.ph, 50); // 2.75/5.5*100
        assert_eq!(scores.rainfall, 20); // 15/75*100
    }

    #[test]
    fn above_high_threshold_falls_off() {
        let scores = score_soil_health(&reading(200.0, 150.0, 200.0, 14.0, 450.0));
        assert_eq!(scores.nitrogen, 75); // 100 - (200-160)/160*100
        assert_eq!(scores.phosphorus, 50); // 100 - (150-100)/100*100
        assert_eq!(scores.potassium, 0); // 100 - (200-100)/100*100
        assert_eq!(scores.ph, 13); // (1 - (14-7.5)/7.5)*100 = 13.33 truncated
        assert_eq!(scores.rainfall, 50); // 100 - (450-300)/300*100
    }

    #[test]
    fn extreme_inputs_are_not_clamped() {
        // Outside the accepted submission domain the formulas keep falling;
        // the scorer itself never clamps.
        let scores = score_soil_health(&reading(480.0, 60.0, 60.0, 6.5, 900.0));
        assert_eq!(scores.nitrogen, -100); // 100 - (480-160)/160*100
        assert_eq!(scores.rainfall, -100); // 100 - (900-300)/300*100
    }
}

// ============================================================================
// Advisory Generation Tests
// ============================================================================

mod advisories {
    use super::*;

    #[test]
    fn depleted_soil_gets_all_five_advisories_in_order() {
        let report = SoilHealthReport::for_reading(&reading(0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(report.overall_score, 0);
        assert_eq!(
            report.recommendations,
            vec![
                "Add nitrogen-rich fertilizers or organic matter like manure",
                "Apply phosphate fertilizers or bone meal",
                "Use potash fertilizers or add wood ash",
                "Adjust soil pH using lime (if acidic) or sulfur (if alkaline)",
                "Consider irrigation or drought-resistant crops",
            ]
        );
    }

    #[test]
    fn healthy_soil_gets_no_advisories() {
        let report = SoilHealthReport::for_reading(&reading(80.0, 60.0, 60.0, 6.5, 200.0));
        assert_eq!(report.overall_score, 100);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn only_low_parameters_trigger_advice() {
        // Nitrogen 20 scores 66, everything else healthy.
        let report = SoilHealthReport::for_reading(&reading(20.0, 60.0, 60.0, 6.5, 200.0));
        assert_eq!(
            report.recommendations,
            vec!["Add nitrogen-rich fertilizers or organic matter like manure"]
        );
    }

    #[test]
    fn overall_score_floors_the_mean() {
        // Nitrogen 20 -> 66, rest 100: mean 93.2 floors to 93.
        let report = SoilHealthReport::for_reading(&reading(20.0, 60.0, 60.0, 6.5, 200.0));
        assert_eq!(report.overall_score, 93);
    }
}
