//! Settings assembly shared by the commands.

use anyhow::Context;
use clap::Args;
use feather_config::{EqConfig, parse_band_override, parse_param_override};
use feather_core::ParameterInfo;
use feather_eq::ChainSettings;
use std::path::PathBuf;

/// Band settings sources, layered: defaults, then `--config`, then `--band`,
/// then `--param`.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Band configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Band override, e.g. "1:freq=1000,gain=12,q=1" (repeatable)
    #[arg(short, long, value_name = "N:KEY=VALUE,...")]
    pub band: Vec<String>,

    /// Parameter override by name, e.g. "Gain 1=12" (repeatable)
    #[arg(short, long, value_name = "NAME=VALUE")]
    pub param: Vec<String>,
}

impl SettingsArgs {
    /// Loads the configuration file (if any) and applies `--band` entries.
    pub fn load_config(&self) -> anyhow::Result<EqConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading band configuration");
                EqConfig::load(path)
                    .with_context(|| format!("failed to load {}", path.display()))?
            }
            None => EqConfig::default(),
        };

        for band in &self.band {
            let entry =
                parse_band_override(band).with_context(|| format!("invalid --band '{band}'"))?;
            config.apply_band(entry);
        }

        Ok(config)
    }

    /// Resolves every source into a settings snapshot.
    pub fn resolve(&self) -> anyhow::Result<(EqConfig, ChainSettings)> {
        let config = self.load_config()?;
        let mut settings = config
            .to_settings()
            .with_context(|| format!("invalid band configuration '{}'", config.name))?;

        for param in &self.param {
            let (index, value) =
                parse_param_override(param).with_context(|| format!("invalid --param '{param}'"))?;
            settings.set_param(index, value);
        }

        Ok((config, settings))
    }
}

/// Prints one line per band.
pub fn print_settings(settings: &ChainSettings) {
    for (i, band) in settings.bands.iter().enumerate() {
        println!(
            "  Band {}: {:>7.0} Hz  {:+5.1} dB  Q {:.2}",
            i + 1,
            band.freq,
            band.gain_db,
            band.q
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_sources() {
        let (config, settings) = SettingsArgs::default().resolve().unwrap();
        assert_eq!(config.name, "Untitled");
        assert_eq!(settings, ChainSettings::default());
    }

    #[test]
    fn param_overrides_band_overrides() {
        let args = SettingsArgs {
            config: None,
            band: vec!["1:freq=1000,gain=6".to_string()],
            param: vec!["Gain 1=-3".to_string()],
        };
        let (_, settings) = args.resolve().unwrap();
        assert_eq!(settings.bands[0].freq, 1000.0);
        assert_eq!(settings.bands[0].gain_db, -3.0);
    }

    #[test]
    fn bad_override_is_reported() {
        let args = SettingsArgs {
            band: vec!["9:gain=1".to_string()],
            ..SettingsArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("invalid --band '9:gain=1'"));
    }

    #[test]
    fn config_file_then_overrides() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("eq.toml");
        std::fs::write(
            &path,
            "name = \"File\"\n[[bands]]\nband = 2\nfreq = 300.0\ngain = 2.0\n",
        )
        .unwrap();

        let args = SettingsArgs {
            config: Some(path),
            band: vec!["2:q=3".to_string()],
            param: Vec::new(),
        };
        let (config, settings) = args.resolve().unwrap();
        assert_eq!(config.name, "File");
        assert_eq!(settings.bands[1].freq, 300.0);
        assert_eq!(settings.bands[1].gain_db, 2.0);
        assert_eq!(settings.bands[1].q, 3.0);
    }
}
