//! Magnitude response command.

use crate::commands::common::{SettingsArgs, print_settings};
use clap::Args;
use feather_eq::{ChainSettings, PeakEq, ProcessSpec};

const LOW_HZ: f64 = 20.0;
const HIGH_HZ: f64 = 20000.0;

#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Sample rate in Hz (defaults to the config file's hint)
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Number of log-spaced frequencies between 20 Hz and 20 kHz
    #[arg(long, default_value = "31")]
    points: usize,

    /// Print as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: &ResponseArgs) -> anyhow::Result<()> {
    if args.points < 2 {
        anyhow::bail!("--points must be at least 2");
    }

    let (config, settings) = args.settings.resolve()?;
    let sample_rate = args.sample_rate.unwrap_or(config.sample_rate);
    if sample_rate == 0 {
        anyhow::bail!("--sample-rate must be positive");
    }

    let points = response(&settings, f64::from(sample_rate), args.points);

    if args.json {
        let list: Vec<serde_json::Value> = points
            .iter()
            .map(|&(freq, db)| serde_json::json!({ "freq": freq, "db": db }))
            .collect();
        let report = serde_json::json!({
            "name": config.name,
            "sample_rate": sample_rate,
            "points": list,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} @ {} Hz", config.name, sample_rate);
    print_settings(&settings);
    println!();
    println!("  {:>9}  {:>8}", "Freq (Hz)", "Gain (dB)");
    for (freq, db) in points {
        println!("  {freq:>9.1}  {db:>+8.2}");
    }

    Ok(())
}

/// Evaluates the cascade at `count` log-spaced frequencies from 20 Hz to
/// 20 kHz. Frequencies at or above Nyquist are skipped.
fn response(settings: &ChainSettings, sample_rate: f64, count: usize) -> Vec<(f64, f64)> {
    let mut eq = PeakEq::new();
    eq.prepare(&ProcessSpec::new(sample_rate, 0, 2), settings);

    let ratio = HIGH_HZ / LOW_HZ;
    (0..count)
        .map(|i| LOW_HZ * ratio.powf(i as f64 / (count - 1) as f64))
        .filter(|&f| f < sample_rate / 2.0)
        .map(|f| (f, eq.magnitude_db(f)))
        .collect()
}
