//! Growth-band boundaries for stage classification.

use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Revenue-growth boundaries separating the four growth stages.
///
/// The hypergrowth boundary is exclusive (`growth > hypergrowth_min_growth`);
/// the growth and mature boundaries are inclusive (`growth >= ...`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageThresholds {
    /// Growth that must be strictly exceeded, with negative FCF margin, for hypergrowth.
    #[serde(default = "default_hypergrowth_min_growth")]
    pub hypergrowth_min_growth: f64,

    /// Minimum growth, with non-negative FCF margin, for the growth stage.
    #[serde(default = "default_growth_min_growth")]
    pub growth_min_growth: f64,

    /// Minimum growth for the mature stage; anything below is decline.
    #[serde(default = "default_mature_min_growth")]
    pub mature_min_growth: f64,
}

fn default_hypergrowth_min_growth() -> f64 {
    0.40
}

fn default_growth_min_growth() -> f64 {
    0.20
}

fn default_mature_min_growth() -> f64 {
    0.05
}

impl Default for StageThresholds {
    fn default() -> Self {
        Self {
            hypergrowth_min_growth: default_hypergrowth_min_growth(),
            growth_min_growth: default_growth_min_growth(),
            mature_min_growth: default_mature_min_growth(),
        }
    }
}

impl StageThresholds {
    /// Creates thresholds with the standard 40% / 20% / 5% boundaries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hypergrowth boundary.
    #[must_use]
    pub fn with_hypergrowth_min_growth(mut self, value: f64) -> Self {
        self.hypergrowth_min_growth = value;
        self
    }

    /// Sets the growth boundary.
    #[must_use]
    pub fn with_growth_min_growth(mut self, value: f64) -> Self {
        self.growth_min_growth = value;
        self
    }

    /// Sets the mature boundary.
    #[must_use]
    pub fn with_mature_min_growth(mut self, value: f64) -> Self {
        self.mature_min_growth = value;
        self
    }
}

impl Validate for StageThresholds {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let fields = [
            ("hypergrowth_min_growth", self.hypergrowth_min_growth),
            ("growth_min_growth", self.growth_min_growth),
            ("mature_min_growth", self.mature_min_growth),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                errors.push(ValidationError::with_rule(
                    field,
                    format!("Threshold must be finite, got {}", value),
                    "finite_threshold",
                ));
            }
        }
        if !errors.is_empty() {
            return errors;
        }

        if self.hypergrowth_min_growth < self.growth_min_growth {
            errors.push(ValidationError::with_rule(
                "hypergrowth_min_growth",
                format!(
                    "Hypergrowth boundary {} is below growth boundary {}",
                    self.hypergrowth_min_growth, self.growth_min_growth
                ),
                "ordered_thresholds",
            ));
        }

        if self.growth_min_growth < self.mature_min_growth {
            errors.push(ValidationError::with_rule(
                "growth_min_growth",
                format!(
                    "Growth boundary {} is below mature boundary {}",
                    self.growth_min_growth, self.mature_min_growth
                ),
                "ordered_thresholds",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let thresholds = StageThresholds::default();
        assert_eq!(thresholds.hypergrowth_min_growth, 0.40);
        assert_eq!(thresholds.growth_min_growth, 0.20);
        assert_eq!(thresholds.mature_min_growth, 0.05);
        assert!(thresholds.is_valid());
    }

    #[test]
    fn test_builder_pattern() {
        let thresholds = StageThresholds::new()
            .with_hypergrowth_min_growth(0.50)
            .with_growth_min_growth(0.25)
            .with_mature_min_growth(0.03);

        assert_eq!(thresholds.hypergrowth_min_growth, 0.50);
        assert_eq!(thresholds.growth_min_growth, 0.25);
        assert_eq!(thresholds.mature_min_growth, 0.03);
        assert!(thresholds.is_valid());
    }

    #[test]
    fn test_out_of_order_rejected() {
        let thresholds = StageThresholds::new().with_growth_min_growth(0.45);
        let errors = thresholds.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "hypergrowth_min_growth");

        let thresholds = StageThresholds::new().with_mature_min_growth(0.30);
        let errors = thresholds.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "growth_min_growth");
    }

    #[test]
    fn test_non_finite_rejected() {
        let thresholds = StageThresholds::new().with_mature_min_growth(f64::NAN);
        let errors = thresholds.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("finite_threshold"));
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let parsed: StageThresholds = toml::from_str("mature_min_growth = 0.03").unwrap();
        assert_eq!(parsed.mature_min_growth, 0.03);
        assert_eq!(parsed.hypergrowth_min_growth, 0.40);
        assert_eq!(parsed.growth_min_growth, 0.20);
    }
}
