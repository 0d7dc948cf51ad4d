//! Input validation for the Agri Advisory Platform
//!
//! A soil reading is validated in full before any scoring runs; the first
//! out-of-range parameter (in canonical order) rejects the whole reading.

use thiserror::Error;

use crate::models::{SoilParameter, SoilReading};

/// Accepted interval for a submitted parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterBounds {
    pub min: f64,
    pub max: f64,
}

/// Accepted submission interval for a parameter.
///
/// Wider than the health thresholds: these bound what the API accepts at
/// all, not what counts as healthy.
pub fn parameter_bounds(parameter: SoilParameter) -> ParameterBounds {
    match parameter {
        SoilParameter::Nitrogen | SoilParameter::Phosphorus | SoilParameter::Potassium => {
            ParameterBounds {
                min: 0.0,
                max: 200.0,
            }
        }
        SoilParameter::Ph => ParameterBounds {
            min: 0.0,
            max: 14.0,
        },
        SoilParameter::Rainfall => ParameterBounds {
            min: 0.0,
            max: 500.0,
        },
    }
}

/// A submitted value fell outside the accepted interval.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{} should be between {} and {}", .parameter.display_name(), .bounds.min, .bounds.max)]
pub struct ParameterOutOfRange {
    pub parameter: SoilParameter,
    pub bounds: ParameterBounds,
    pub value: f64,
}

/// Validate a reading against the accepted parameter intervals.
pub fn validate_soil_reading(reading: &SoilReading) -> Result<(), ParameterOutOfRange> {
    for parameter in SoilParameter::ALL {
        let bounds = parameter_bounds(parameter);
        let value = reading.value(parameter);
        if value < bounds.min || value > bounds.max {
            return Err(ParameterOutOfRange {
                parameter,
                bounds,
                value,
            });
        }
    }
    Ok(())
}
