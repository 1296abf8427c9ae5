//! Routing of the four host channel shapes through `render_channel`.

use feather_eq::{ChainSettings, PeakEq, ProcessSpec};
use feather_plugin::{PortChannel, render_channel};

const SAMPLE_RATE: f64 = 48000.0;

fn boosted() -> ChainSettings {
    let mut settings = ChainSettings::default();
    settings.bands[0].freq = 200.0;
    settings.bands[0].gain_db = 12.0;
    settings.bands[2].gain_db = -9.0;
    settings
}

fn prepared() -> PeakEq {
    let mut eq = PeakEq::new();
    eq.prepare(&ProcessSpec::new(SAMPLE_RATE, 256, 2), &boosted());
    eq
}

fn signal(len: usize) -> Vec<f32> {
    (0..len).map(|i| (i as f32 * 0.05).sin() * 0.5).collect()
}

/// Output of a fresh processor filtering `input` on `channel`.
fn reference(channel: usize, input: &[f32]) -> Vec<f32> {
    let mut eq = prepared();
    let mut buf = input.to_vec();
    eq.process_channel(channel, &mut buf);
    buf
}

#[test]
fn in_place_is_filtered() {
    let input = signal(128);
    let mut eq = prepared();
    let mut buf = input.clone();
    render_channel(&mut eq, 0, PortChannel::InPlace(&mut buf));

    assert_ne!(buf, input);
    assert_eq!(buf, reference(0, &input));
}

#[test]
fn separate_buffers_copy_then_filter() {
    let input = signal(100);
    let mut eq = prepared();
    let mut output = vec![7.0f32; 100];
    render_channel(&mut eq, 1, PortChannel::Separate(&input, &mut output));

    assert_eq!(output, reference(1, &input));
}

#[test]
fn separate_output_tail_is_zeroed() {
    let input = signal(96);
    let mut eq = prepared();
    let mut output = vec![7.0f32; 128];
    render_channel(&mut eq, 0, PortChannel::Separate(&input, &mut output));

    assert_eq!(output[..96], reference(0, &input)[..]);
    assert!(output[96..].iter().all(|&s| s == 0.0));
}

#[test]
fn output_only_is_cleared() {
    let mut eq = prepared();
    let mut output = vec![0.3f32; 64];
    render_channel(&mut eq, 0, PortChannel::OutputOnly(&mut output));
    assert!(output.iter().all(|&s| s == 0.0));
}

#[test]
fn input_only_leaves_state_alone() {
    let input = signal(64);
    let mut eq = prepared();
    render_channel(&mut eq, 0, PortChannel::InputOnly);

    let mut buf = input.clone();
    render_channel(&mut eq, 0, PortChannel::InPlace(&mut buf));
    assert_eq!(buf, reference(0, &input));
}

#[test]
fn channels_past_stereo_pass_through() {
    let input = signal(64);
    let mut eq = prepared();

    let mut in_place = input.clone();
    render_channel(&mut eq, 2, PortChannel::InPlace(&mut in_place));
    assert_eq!(in_place, input);

    let mut output = vec![0.0f32; 80];
    render_channel(&mut eq, 3, PortChannel::Separate(&input, &mut output));
    assert_eq!(output[..64], input[..]);
    assert!(output[64..].iter().all(|&s| s == 0.0));

    // The stereo chains saw nothing.
    assert!(eq.left().is_cleared() && eq.right().is_cleared());
}
