//! Configuration files for the Feather equalizer tools.
//!
//! Band settings are stored as TOML and checked against the same parameter
//! layout the plugin exposes to hosts. The plugin itself never reads or
//! writes these files.
//!
//! # Features
//!
//! - **Config files**: [`EqConfig`] load/save, partial band entries
//! - **Validation**: band numbers, duplicates and value ranges
//! - **Overrides**: `--band 1:freq=1000,gain=12` and `--param "Gain 1=12"`
//!
//! # Example
//!
//! ```rust,no_run
//! use feather_config::{BandConfig, EqConfig};
//!
//! let config = EqConfig::new("Presence")
//!     .with_description("Vocal lift")
//!     .with_band(BandConfig::new(3).with_freq(3000.0).with_gain(4.0).with_q(1.2));
//!
//! config.save("presence.toml").unwrap();
//!
//! let loaded = EqConfig::load("presence.toml").unwrap();
//! let settings = loaded.to_settings().unwrap();
//! assert_eq!(settings.bands[2].gain_db, 4.0);
//! ```

mod config;
mod error;
mod overrides;

/// Band configuration validation.
pub mod validation;

pub use config::{BandConfig, EqConfig};
pub use error::ConfigError;
pub use overrides::{parse_band_override, parse_param_override};
pub use validation::{
    ValidationError, ValidationResult, validate_band, validate_config, validate_param,
};
