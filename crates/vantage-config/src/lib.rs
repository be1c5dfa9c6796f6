//! Vantage Configuration Layer
//!
//! Explicit configuration values for the Vantage growth-stage valuation
//! library. Configuration is loaded once and passed by reference; nothing
//! here is global.
//!
//! # Features
//!
//! - **Stage Thresholds**: Growth boundaries between hypergrowth, growth, mature and decline
//! - **Scenario Multipliers**: Bear / base / bull growth multipliers
//! - **Batch Settings**: Parallelism threshold for large batches
//! - **Validation**: Every section implements [`Validate`]
//! - **File Loading**: TOML or JSON, chosen by extension
//!
//! # Example
//!
//! ```rust
//! use vantage_config::{Validate, VantageConfig, ScenarioConfig};
//!
//! let config = VantageConfig::from_toml_str(
//!     r#"
//!     [thresholds]
//!     mature_min_growth = 0.04
//!
//!     [scenarios]
//!     bull = 2.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.thresholds.mature_min_growth, 0.04);
//! assert_eq!(config.thresholds.hypergrowth_min_growth, 0.40);
//! assert_eq!(config.scenarios.bull, 2.0);
//!
//! let broken = config.with_scenarios(ScenarioConfig::new(1.5, 1.0, 2.0));
//! assert!(!broken.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod scenario;
mod settings;
mod thresholds;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use scenario::ScenarioConfig;
pub use settings::{
    default_config_path, BatchConfig, ConfigFormat, VantageConfig, CONFIG_FILE_NAME,
};
pub use thresholds::StageThresholds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::scenario::ScenarioConfig;
    pub use crate::settings::{BatchConfig, VantageConfig};
    pub use crate::thresholds::StageThresholds;
}
