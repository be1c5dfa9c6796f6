//! Valuation methods and the trust attached to their output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::VantageError;

/// A valuation method whose output can be blended into a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValuationMethod {
    /// Discounted cash flow.
    #[serde(rename = "DCF")]
    Dcf,
    /// Comparable company analysis (peer trading multiples).
    #[serde(rename = "CCA")]
    Cca,
    /// Probability-weighted bull/base/bear scenarios.
    Scenarios,
    /// Leveraged buyout returns model.
    #[serde(rename = "LBO")]
    Lbo,
    /// Liquidation value of assets.
    Liquidation,
}

impl ValuationMethod {
    /// All methods, in display order.
    pub const ALL: [ValuationMethod; 5] = [
        ValuationMethod::Dcf,
        ValuationMethod::Cca,
        ValuationMethod::Scenarios,
        ValuationMethod::Lbo,
        ValuationMethod::Liquidation,
    ];

    /// Returns the short display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dcf => "DCF",
            Self::Cca => "CCA",
            Self::Scenarios => "Scenarios",
            Self::Lbo => "LBO",
            Self::Liquidation => "Liquidation",
        }
    }

    /// Returns the long-form description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Dcf => "Discounted Cash Flow",
            Self::Cca => "Comparable Company Analysis",
            Self::Scenarios => "Bull/Base/Bear Scenarios",
            Self::Lbo => "Leveraged Buyout",
            Self::Liquidation => "Liquidation Value",
        }
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ValuationMethod {
    type Err = VantageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dcf" => Ok(Self::Dcf),
            "cca" | "comps" => Ok(Self::Cca),
            "scenarios" | "scenario" => Ok(Self::Scenarios),
            "lbo" => Ok(Self::Lbo),
            "liquidation" => Ok(Self::Liquidation),
            _ => Err(VantageError::UnknownMethod(s.to_string())),
        }
    }
}

/// Qualitative confidence in a method's output for a given stage.
///
/// Ordered from `None` (ignore) to `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustLevel {
    /// Output should not be relied on.
    None,
    /// Directional only.
    Low,
    /// Usable with judgment.
    Medium,
    /// Primary reference.
    High,
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrustLevel::None => "NONE",
            TrustLevel::Low => "LOW",
            TrustLevel::Medium => "MEDIUM",
            TrustLevel::High => "HIGH",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(ValuationMethod::Dcf.name(), "DCF");
        assert_eq!(ValuationMethod::Cca.to_string(), "CCA");
        assert_eq!(ValuationMethod::Lbo.description(), "Leveraged Buyout");
    }

    #[test]
    fn test_method_from_str() {
        for method in ValuationMethod::ALL {
            assert_eq!(method.name().parse::<ValuationMethod>().unwrap(), method);
        }
        assert_eq!("comps".parse::<ValuationMethod>().unwrap(), ValuationMethod::Cca);
        assert!("multiples".parse::<ValuationMethod>().is_err());
    }

    #[test]
    fn test_method_serde() {
        let json = serde_json::to_string(&ValuationMethod::Dcf).unwrap();
        assert_eq!(json, "\"DCF\"");
        let parsed: ValuationMethod = serde_json::from_str("\"Liquidation\"").unwrap();
        assert_eq!(parsed, ValuationMethod::Liquidation);
    }

    #[test]
    fn test_trust_ordering() {
        assert!(TrustLevel::None < TrustLevel::Low);
        assert!(TrustLevel::Low < TrustLevel::Medium);
        assert!(TrustLevel::Medium < TrustLevel::High);
        assert_eq!(TrustLevel::High.to_string(), "HIGH");
        assert_eq!(serde_json::to_string(&TrustLevel::None).unwrap(), "\"NONE\"");
    }
}
