//! Command-line override syntax.
//!
//! Two forms are accepted:
//!
//! - band form: `"2:freq=400,gain=-3,q=1.5"` (one-based band, any subset of keys)
//! - parameter form: `"Gain 2=-3 dB"` (any name, short name or string ID from
//!   the layout table)
//!
//! Values may carry their unit (`"2.5 kHz"`, `"-3dB"`). Parsed values are
//! clamped to range, the same as host text entry.

use feather_eq::layout::{self, BandParam};

use crate::config::BandConfig;
use crate::validation::{ValidationError, ValidationResult, band_index};

/// Parses a band override: `"<band>:<key>=<value>[,<key>=<value>...]"`.
///
/// # Example
///
/// ```rust
/// use feather_config::parse_band_override;
///
/// let band = parse_band_override("1:freq=1 kHz,gain=12").unwrap();
/// assert_eq!(band.band, 1);
/// assert_eq!(band.freq, Some(1000.0));
/// assert_eq!(band.gain, Some(12.0));
/// assert_eq!(band.q, None);
/// ```
pub fn parse_band_override(s: &str) -> ValidationResult<BandConfig> {
    let (band_str, assignments) = s.split_once(':').ok_or_else(|| ValidationError::InvalidFormat {
        param: s.to_string(),
        reason: "expected <band>:<key>=<value>,...".to_string(),
    })?;

    let band: u8 = band_str.trim().parse().map_err(|_| ValidationError::InvalidFormat {
        param: s.to_string(),
        reason: format!("'{}' is not a band number", band_str.trim()),
    })?;
    let index = band_index(band)?;

    let mut entry = BandConfig::new(band);
    for assignment in assignments.split(',').filter(|a| !a.trim().is_empty()) {
        let (key, value) = split_assignment(assignment)?;
        let param = BandParam::from_key(key)
            .ok_or_else(|| ValidationError::UnknownParameter(key.trim().to_string()))?;
        let desc = layout::band_descriptor(index, param)
            .ok_or_else(|| ValidationError::UnknownParameter(key.trim().to_string()))?;
        let parsed = desc.parse_value(value).ok_or_else(|| ValidationError::InvalidFormat {
            param: desc.name.to_string(),
            reason: format!("'{}' is not a number", value.trim()),
        })?;
        entry.set(param, parsed);
    }
    Ok(entry)
}

/// Parses a parameter override: `"<name>=<value>"`.
///
/// Returns the parameter index and the clamped value.
///
/// # Example
///
/// ```rust
/// use feather_config::parse_param_override;
///
/// assert_eq!(parse_param_override("Gain 1=12"), Ok((1, 12.0)));
/// assert_eq!(parse_param_override("q_4=99"), Ok((11, 10.0)));
/// ```
pub fn parse_param_override(s: &str) -> ValidationResult<(usize, f32)> {
    let (name, value) = split_assignment(s)?;
    let index = layout::index_by_name(name)
        .ok_or_else(|| ValidationError::UnknownParameter(name.trim().to_string()))?;
    let desc = &layout::PARAMS[index];
    let parsed = desc.parse_value(value).ok_or_else(|| ValidationError::InvalidFormat {
        param: desc.name.to_string(),
        reason: format!("'{}' is not a number", value.trim()),
    })?;
    Ok((index, parsed))
}

fn split_assignment(s: &str) -> ValidationResult<(&str, &str)> {
    s.split_once('=').ok_or_else(|| ValidationError::InvalidFormat {
        param: s.trim().to_string(),
        reason: "expected key=value".to_string(),
    })
}
