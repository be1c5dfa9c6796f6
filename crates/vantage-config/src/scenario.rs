//! Bull / base / bear growth multipliers.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Multipliers applied to revenue growth to build bear, base and bull cases.
///
/// Only the ordering `bear < base < bull` is meaningful; the default values
/// are not calibrated against any reference data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Bear-case multiplier.
    #[serde(default = "default_bear")]
    pub bear: f64,

    /// Base-case multiplier.
    #[serde(default = "default_base")]
    pub base: f64,

    /// Bull-case multiplier.
    #[serde(default = "default_bull")]
    pub bull: f64,
}

fn default_bear() -> f64 {
    0.5
}

fn default_base() -> f64 {
    1.0
}

fn default_bull() -> f64 {
    1.5
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            bear: default_bear(),
            base: default_base(),
            bull: default_bull(),
        }
    }
}

impl ScenarioConfig {
    /// Creates a scenario configuration with explicit multipliers.
    #[must_use]
    pub fn new(bear: f64, base: f64, bull: f64) -> Self {
        Self { bear, base, bull }
    }

    /// Returns the multipliers as `(bear, base, bull)`.
    #[must_use]
    pub fn multipliers(&self) -> [f64; 3] {
        [self.bear, self.base, self.bull]
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in [("bear", self.bear), ("base", self.base), ("bull", self.bull)] {
            if !value.is_finite() || value < 0.0 {
                errors.push(ValidationError::with_rule(
                    field,
                    format!("Multiplier must be finite and non-negative, got {}", value),
                    "valid_multiplier",
                ));
            }
        }
        if !errors.is_empty() {
            return errors;
        }

        if self.bear >= self.base {
            errors.push(ValidationError::with_rule(
                "bear",
                format!("Bear multiplier {} must be below base {}", self.bear, self.base),
                "ordered_multipliers",
            ));
        }
        if self.bull <= self.base {
            errors.push(ValidationError::with_rule(
                "bull",
                format!("Bull multiplier {} must exceed base {}", self.bull, self.base),
                "ordered_multipliers",
            ));
        }

        errors
    }
}
