//! Offline rendering of a WAV file through the equalizer.

use crate::commands::common::{SettingsArgs, print_settings};
use crate::wav::{WavSpec, read_wav, write_wav};
use clap::Args;
use feather_core::linear_to_db;
use feather_eq::{PeakEq, ProcessSpec};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    settings: SettingsArgs,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    if args.block_size == 0 {
        anyhow::bail!("--block-size must be at least 1");
    }
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("--bit-depth must be 16, 24 or 32");
    }

    let (config, settings) = args.settings.resolve()?;

    println!("Reading {}...", args.input.display());
    let (mut channels, spec) = read_wav(&args.input)?;
    let frames = channels.first().map_or(0, Vec::len);
    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        frames,
        spec.channels,
        spec.sample_rate,
        frames as f64 / f64::from(spec.sample_rate)
    );

    println!("Settings ({}):", config.name);
    print_settings(&settings);

    let num_inputs = channels.len();
    let mut eq = PeakEq::new();
    eq.prepare(
        &ProcessSpec::new(f64::from(spec.sample_rate), args.block_size, num_inputs),
        &settings,
    );

    let input_peak = peak(&channels);

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    render_blocks(&mut eq, &settings, &mut channels, args.block_size, |done| {
        pb.set_position(done as u64);
    });

    pb.finish_with_message("done");
    eq.release();

    let output_peak = peak(&channels);
    println!("\nStats:");
    println!("  Input:  Peak {:.1} dB", linear_to_db(input_peak));
    println!("  Output: Peak {:.1} dB", linear_to_db(output_peak));

    let out_spec = WavSpec {
        bits_per_sample: args.bit_depth,
        ..spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &channels, out_spec)?;
    tracing::info!(
        frames,
        channels = num_inputs,
        output = %args.output.display(),
        "render complete"
    );
    println!("Done!");

    Ok(())
}

/// Runs `channels` through `eq` in blocks of `block_size` frames.
///
/// Each block follows the host contract: coefficients are recomputed from
/// `settings`, then channels 0 and 1 are filtered in place.
fn render_blocks(
    eq: &mut PeakEq,
    settings: &feather_eq::ChainSettings,
    channels: &mut [Vec<f32>],
    block_size: usize,
    mut progress: impl FnMut(usize),
) {
    let frames = channels.first().map_or(0, Vec::len);
    let num_inputs = channels.len();
    let mut start = 0;

    while start < frames {
        let end = (start + block_size).min(frames);
        let mut block: Vec<&mut [f32]> = channels
            .iter_mut()
            .map(|channel| &mut channel[start..end])
            .collect();
        eq.process_block(settings, &mut block, num_inputs);
        progress(end);
        start = end;
    }
}

fn peak(channels: &[Vec<f32>]) -> f32 {
    channels
        .iter()
        .flat_map(|c| c.iter())
        .map(|s| s.abs())
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use feather_core::ParameterInfo;
    use feather_eq::ChainSettings;

    fn sine(freq: f32, sample_rate: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate).sin() * 0.1)
            .collect()
    }

    #[test]
    fn block_size_does_not_change_output() {
        let mut settings = ChainSettings::default();
        settings.set_param(1, 9.0);
        settings.set_param(7, -6.0);

        let input = sine(440.0, 48000.0, 3000);
        let mut reference = vec![input.clone(), input.clone()];
        let mut eq = PeakEq::new();
        eq.prepare(&ProcessSpec::new(48000.0, 3000, 2), &settings);
        render_blocks(&mut eq, &settings, &mut reference, 3000, |_| {});

        for block_size in [1, 64, 333, 512] {
            let mut out = vec![input.clone(), input.clone()];
            let mut eq = PeakEq::new();
            eq.prepare(&ProcessSpec::new(48000.0, block_size, 2), &settings);
            render_blocks(&mut eq, &settings, &mut out, block_size, |_| {});
            assert_eq!(out, reference, "block size {block_size}");
        }
    }

    #[test]
    fn progress_reaches_end() {
        let settings = ChainSettings::default();
        let mut channels = vec![vec![0.0; 1000]];
        let mut eq = PeakEq::new();
        eq.prepare(&ProcessSpec::new(44100.0, 300, 1), &settings);

        let mut reported = Vec::new();
        render_blocks(&mut eq, &settings, &mut channels, 300, |done| {
            reported.push(done);
        });
        assert_eq!(reported, vec![300, 600, 900, 1000]);
    }

    #[test]
    fn boost_raises_peak() {
        let mut settings = ChainSettings::default();
        settings.set_param(0, 1000.0);
        settings.set_param(1, 12.0);

        let mut channels = vec![sine(1000.0, 48000.0, 48000)];
        let mut eq = PeakEq::new();
        eq.prepare(&ProcessSpec::new(48000.0, 512, 1), &settings);
        render_blocks(&mut eq, &settings, &mut channels, 512, |_| {});

        let tail_peak = peak(&[channels[0][24000..].to_vec()]);
        assert!((tail_peak - 0.1 * 3.981).abs() < 0.01, "peak {tail_peak}");
    }
}
