//! Band configuration file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use feather_core::ParameterInfo;
use feather_eq::ChainSettings;
use feather_eq::layout::{BAND_COUNT, BandParam, param_index};

use crate::error::ConfigError;
use crate::validation::{band_index, validate_config};

/// One band entry of a configuration file.
///
/// Every value is optional; a missing value keeps the band's default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BandConfig {
    /// One-based band number (1..=4).
    pub band: u8,

    /// Center frequency in Hz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freq: Option<f32>,

    /// Gain in dB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f32>,

    /// Quality factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<f32>,
}

impl BandConfig {
    /// Creates an entry for the one-based `band` with no values set.
    pub fn new(band: u8) -> Self {
        Self {
            band,
            freq: None,
            gain: None,
            q: None,
        }
    }

    /// Sets the center frequency.
    pub fn with_freq(mut self, freq: f32) -> Self {
        self.freq = Some(freq);
        self
    }

    /// Sets the gain.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = Some(gain);
        self
    }

    /// Sets the quality factor.
    pub fn with_q(mut self, q: f32) -> Self {
        self.q = Some(q);
        self
    }

    /// Reads one control, if set.
    pub fn get(&self, param: BandParam) -> Option<f32> {
        match param {
            BandParam::Freq => self.freq,
            BandParam::Gain => self.gain,
            BandParam::Q => self.q,
        }
    }

    /// Sets one control.
    pub fn set(&mut self, param: BandParam, value: f32) {
        let slot = match param {
            BandParam::Freq => &mut self.freq,
            BandParam::Gain => &mut self.gain,
            BandParam::Q => &mut self.q,
        };
        *slot = Some(value);
    }

    /// Copies every value set in `other` into `self`.
    pub fn merge(&mut self, other: &BandConfig) {
        for param in BandParam::ALL {
            if let Some(value) = other.get(param) {
                self.set(param, value);
            }
        }
    }
}

/// Equalizer configuration file.
///
/// Used by the offline tools to describe band settings on disk. Bands may
/// appear in any order and any subset; absent bands keep their defaults.
///
/// # TOML Format
///
/// ```toml
/// name = "Vocal presence"
/// description = "Lift around 3 kHz, tame the low mids"
/// sample_rate = 48000
///
/// [[bands]]
/// band = 2
/// freq = 400.0
/// gain = -3.0
/// q = 1.5
///
/// [[bands]]
/// band = 4
/// freq = 3000.0
/// gain = 4.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EqConfig {
    /// Name of the configuration.
    pub name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    /// Used by tools that synthesize or analyze without an input file.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Band entries.
    #[serde(default)]
    pub bands: Vec<BandConfig>,
}

fn default_sample_rate() -> u32 {
    48000
}

impl Default for EqConfig {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl EqConfig {
    /// Create a new configuration with no band entries.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            bands: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Append a band entry.
    pub fn with_band(mut self, band: BandConfig) -> Self {
        self.bands.push(band);
        self
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Entry for the one-based `band`, if present.
    pub fn band(&self, band: u8) -> Option<&BandConfig> {
        self.bands.iter().find(|b| b.band == band)
    }

    /// Merges `entry` into the existing entry for its band, or appends it.
    pub fn apply_band(&mut self, entry: BandConfig) {
        match self.bands.iter_mut().find(|b| b.band == entry.band) {
            Some(existing) => existing.merge(&entry),
            None => self.bands.push(entry),
        }
    }

    /// Validates and converts to a settings snapshot.
    ///
    /// Values are snapped to each parameter's step grid, exactly as a host
    /// write would be.
    pub fn to_settings(&self) -> Result<ChainSettings, ConfigError> {
        validate_config(self)?;

        let mut settings = ChainSettings::default();
        for entry in &self.bands {
            let band = band_index(entry.band)?;
            for param in BandParam::ALL {
                if let Some(value) = entry.get(param) {
                    settings.set_param(param_index(band, param), value);
                }
            }
        }
        Ok(settings)
    }

    /// Builds a configuration holding every value of `settings`.
    pub fn from_settings(name: impl Into<String>, settings: &ChainSettings) -> Self {
        let bands = (0..BAND_COUNT)
            .map(|i| {
                let b = &settings.bands[i];
                BandConfig::new(i as u8 + 1)
                    .with_freq(b.freq)
                    .with_gain(b.gain_db)
                    .with_q(b.q)
            })
            .collect();

        Self {
            bands,
            ..Self::new(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn new_config_defaults() {
        let config = EqConfig::new("Flat");
        assert_eq!(config.name, "Flat");
        assert!(config.description.is_none());
        assert_eq!(config.sample_rate, 48000);
        assert!(config.bands.is_empty());
        assert_eq!(config.to_settings().unwrap(), ChainSettings::default());
    }

    #[test]
    fn builder() {
        let config = EqConfig::new("Air")
            .with_description("Top-end lift")
            .with_sample_rate(44100)
            .with_band(BandConfig::new(4).with_freq(12000.0).with_gain(3.0));

        assert_eq!(config.description.as_deref(), Some("Top-end lift"));
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.band(4).and_then(|b| b.freq), Some(12000.0));
        assert!(config.band(1).is_none());
    }

    #[test]
    fn parse_partial_toml() {
        let config = EqConfig::from_toml(
            r#"
            name = "Mud cut"

            [[bands]]
            band = 2
            gain = -4.5
            "#,
        )
        .unwrap();

        assert_eq!(config.sample_rate, 48000);
        let settings = config.to_settings().unwrap();
        assert_eq!(settings.bands[1].gain_db, -4.5);
        assert_eq!(settings.bands[1].freq, 500.0);
        assert_eq!(settings.bands[1].q, 1.0);
        assert_eq!(settings.bands[0], ChainSettings::default().bands[0]);
    }

    #[test]
    fn unknown_band_field_rejected() {
        let result = EqConfig::from_toml(
            r#"
            name = "typo"
            [[bands]]
            band = 1
            gian = 3.0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn to_settings_snaps_to_grid() {
        let config = EqConfig::new("snap").with_band(
            BandConfig::new(1)
                .with_freq(1000.4)
                .with_gain(2.7)
                .with_q(0.72),
        );
        let settings = config.to_settings().unwrap();
        assert_eq!(settings.bands[0].freq, 1000.0);
        assert_eq!(settings.bands[0].gain_db, 2.5);
        assert!((settings.bands[0].q - 0.7).abs() < 1e-5);
    }

    #[test]
    fn to_settings_rejects_invalid() {
        let config = EqConfig::new("bad").with_band(BandConfig::new(1).with_gain(48.0));
        assert!(matches!(
            config.to_settings(),
            Err(ConfigError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn settings_roundtrip() {
        let mut settings = ChainSettings::default();
        settings.bands[0].gain_db = 6.0;
        settings.bands[3].freq = 8000.0;
        settings.bands[2].q = 2.5;

        let config = EqConfig::from_settings("roundtrip", &settings);
        assert_eq!(config.bands.len(), 4);
        assert_eq!(config.to_settings().unwrap(), settings);
    }

    #[test]
    fn apply_band_merges() {
        let mut config = EqConfig::new("merge").with_band(BandConfig::new(2).with_freq(300.0));
        config.apply_band(BandConfig::new(2).with_gain(-6.0));
        config.apply_band(BandConfig::new(3).with_q(4.0));

        assert_eq!(config.bands.len(), 2);
        let b2 = config.band(2).unwrap();
        assert_eq!((b2.freq, b2.gain, b2.q), (Some(300.0), Some(-6.0), None));
        assert_eq!(config.band(3).and_then(|b| b.q), Some(4.0));
    }

    #[test]
    fn toml_roundtrip() {
        let config = EqConfig::new("Round")
            .with_description("trip")
            .with_band(BandConfig::new(1).with_gain(1.5))
            .with_band(BandConfig::new(3).with_freq(2000.0).with_q(0.5));

        let text = config.to_toml().unwrap();
        assert!(!text.contains("freq = 250"), "unset values are not written");
        assert_eq!(EqConfig::from_toml(&text).unwrap(), config);
    }
}
