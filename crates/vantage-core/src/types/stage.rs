//! Growth stage classification buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VantageError;

/// Company maturity bucket used to pick a valuation methodology.
///
/// Exactly one stage applies to any set of signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrowthStage {
    /// Revenue growing above 40% while still burning cash.
    Hypergrowth,
    /// Revenue growing at least 20% with non-negative free cash flow.
    Growth,
    /// Revenue growing at least 5%.
    Mature,
    /// Revenue growing below 5% or contracting.
    Decline,
}

impl GrowthStage {
    /// All stages, in classification priority order.
    pub const ALL: [GrowthStage; 4] = [
        GrowthStage::Hypergrowth,
        GrowthStage::Growth,
        GrowthStage::Mature,
        GrowthStage::Decline,
    ];

    /// Returns a human-readable name for the stage.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hypergrowth => "Hypergrowth",
            Self::Growth => "Growth",
            Self::Mature => "Mature",
            Self::Decline => "Decline",
        }
    }

    /// Returns the upper-case code used in reports and serialization.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hypergrowth => "HYPERGROWTH",
            Self::Growth => "GROWTH",
            Self::Mature => "MATURE",
            Self::Decline => "DECLINE",
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for GrowthStage {
    type Err = VantageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HYPERGROWTH" => Ok(Self::Hypergrowth),
            "GROWTH" => Ok(Self::Growth),
            "MATURE" => Ok(Self::Mature),
            "DECLINE" => Ok(Self::Decline),
            _ => Err(VantageError::UnknownStage(s.to_string())),
        }
    }
}
