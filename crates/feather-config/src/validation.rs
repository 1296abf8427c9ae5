//! Band configuration validation.
//!
//! Values are checked against the same descriptor table the plugin exposes
//! to hosts, so a configuration that validates here is always representable
//! as host parameter values.
//!
//! # Example
//!
//! ```rust
//! use feather_config::{BandConfig, EqConfig, validate_config};
//!
//! let config = EqConfig::new("Bright").with_band(BandConfig::new(4).with_gain(3.0));
//! validate_config(&config).expect("valid config");
//!
//! let bad = EqConfig::new("Broken").with_band(BandConfig::new(5));
//! assert!(validate_config(&bad).is_err());
//! ```

use std::collections::HashSet;

use feather_eq::layout::{self, BAND_COUNT, BandParam};
use thiserror::Error;

use crate::config::{BandConfig, EqConfig};

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Band number outside `1..=4`.
    #[error("band {band} does not exist (expected 1..={max})")]
    UnknownBand {
        /// The band number that was given.
        band: u8,
        /// Highest valid band number.
        max: usize,
    },

    /// The same band number appears twice.
    #[error("band {0} appears more than once")]
    DuplicateBand(u8),

    /// Unknown parameter name.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Invalid parameter format.
    #[error("invalid format for parameter '{param}': {reason}")]
    InvalidFormat {
        /// Name of the parameter.
        param: String,
        /// Description of the format error.
        reason: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that a value lies inside the range of the parameter at `index`.
pub fn validate_param(index: usize, value: f32) -> ValidationResult<()> {
    let desc = layout::descriptor(index)
        .ok_or_else(|| ValidationError::UnknownParameter(format!("#{index}")))?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            param: desc.name.to_string(),
            reason: format!("{value} is not a finite number"),
        });
    }
    if value < desc.min || value > desc.max {
        return Err(ValidationError::OutOfRange {
            param: desc.name.to_string(),
            value,
            min: desc.min,
            max: desc.max,
        });
    }
    Ok(())
}

/// Validates one band entry: band number and every value present.
pub fn validate_band(band: &BandConfig) -> ValidationResult<()> {
    let index = band_index(band.band)?;
    let mut errors = Vec::new();

    for param in BandParam::ALL {
        if let Some(value) = band.get(param)
            && let Err(e) = validate_param(layout::param_index(index, param), value)
        {
            errors.push(e);
        }
    }

    collapse(errors)
}

/// Validates a whole configuration.
///
/// Collects every problem: unknown or duplicate band numbers and
/// out-of-range values. A single problem is returned as-is; several are
/// wrapped in [`ValidationError::Multiple`].
pub fn validate_config(config: &EqConfig) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for band in &config.bands {
        if !seen.insert(band.band) {
            errors.push(ValidationError::DuplicateBand(band.band));
            continue;
        }
        match validate_band(band) {
            Ok(()) => {}
            Err(ValidationError::Multiple(inner)) => errors.extend(inner),
            Err(e) => errors.push(e),
        }
    }

    collapse(errors)
}

/// Converts a one-based band number to a zero-based index.
pub fn band_index(band: u8) -> ValidationResult<usize> {
    let index = usize::from(band);
    if (1..=BAND_COUNT).contains(&index) {
        Ok(index - 1)
    } else {
        Err(ValidationError::UnknownBand {
            band,
            max: BAND_COUNT,
        })
    }
}

fn collapse(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
