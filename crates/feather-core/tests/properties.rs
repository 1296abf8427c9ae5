//! Property-based tests for feather-core DSP primitives.
//!
//! Tests peaking filter stability, coefficient determinism and parameter
//! normalization using proptest for randomized input generation.

use feather_core::{
    Biquad, BiquadCoefficients, ParamDescriptor, ParamScale, peaking_eq_coefficients,
};

use proptest::prelude::*;

const SAMPLE_RATES: [f64; 4] = [22050.0, 44100.0, 48000.0, 96000.0];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any center frequency below 0.475 fs, any Q (0.1-10.0) and any gain
    /// (-24..24 dB), a peaking section produces finite output for random
    /// finite input.
    #[test]
    fn peaking_stability(
        freq in 20.0f64..20000.0f64,
        q in 0.1f64..10.0f64,
        gain_db in -24.0f64..24.0f64,
        sr_index in 0usize..4,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let sample_rate = SAMPLE_RATES[sr_index];
        let freq = freq.min(sample_rate * 0.475);
        let mut biquad = Biquad::with_coefficients(
            peaking_eq_coefficients(freq, q, gain_db, sample_rate),
        );

        for _ in 0..32 {
            for &sample in &input {
                let out = biquad.process(sample);
                prop_assert!(
                    out.is_finite(),
                    "peaking (freq={}, q={}, gain={}, sr={}) produced non-finite output {}",
                    freq, q, gain_db, sample_rate, out
                );
            }
        }
    }

    /// Poles of every peaking section lie strictly inside the unit circle.
    #[test]
    fn peaking_poles_inside_unit_circle(
        freq in 20.0f64..20000.0f64,
        q in 0.1f64..10.0f64,
        gain_db in -24.0f64..24.0f64,
    ) {
        let c = peaking_eq_coefficients(freq, q, gain_db, 48000.0);
        // Jury criterion for z^2 + a1 z + a2
        prop_assert!(c.a2.abs() < 1.0, "a2 = {}", c.a2);
        prop_assert!(c.a1.abs() < 1.0 + c.a2, "a1 = {}, a2 = {}", c.a1, c.a2);
    }

    /// Identical inputs produce bit-identical coefficients.
    #[test]
    fn coefficients_deterministic(
        freq in 20.0f64..20000.0f64,
        q in 0.1f64..10.0f64,
        gain_db in -24.0f64..24.0f64,
    ) {
        let a = peaking_eq_coefficients(freq, q, gain_db, 44100.0);
        let b = peaking_eq_coefficients(freq, q, gain_db, 44100.0);
        prop_assert_eq!(a, b);
    }

    /// Response at the center frequency equals the requested gain.
    ///
    /// Very narrow low bells are excluded: their poles sit so close to the
    /// unit circle that f32 coefficient rounding dominates the peak height.
    #[test]
    fn center_response_matches_gain(
        freq in 300.0f64..10000.0f64,
        q in 0.1f64..4.0f64,
        gain_db in -24.0f64..24.0f64,
    ) {
        let c = peaking_eq_coefficients(freq, q, gain_db, 48000.0);
        let measured = c.magnitude_db(freq, 48000.0);
        prop_assert!(
            (measured - gain_db).abs() < 0.1,
            "freq={} q={} gain={} measured {}", freq, q, gain_db, measured
        );
    }

    /// At 0 dB the section passes any signal through unchanged.
    #[test]
    fn zero_gain_is_transparent(
        freq in 20.0f64..20000.0f64,
        q in 0.1f64..10.0f64,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut biquad = Biquad::with_coefficients(
            peaking_eq_coefficients(freq, q, 0.0, 48000.0),
        );
        for &sample in &input {
            let out = biquad.process(sample);
            prop_assert!((out - sample).abs() < 1e-5, "in {} out {}", sample, out);
        }
    }

    /// Skewed normalize/denormalize round trip stays within 0.01 % of the value.
    #[test]
    fn skewed_normalize_roundtrip(value in 20.0f32..20000.0f32) {
        let desc = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 20000.0, 1000.0)
            .with_scale(ParamScale::skew(0.25));
        let rt = desc.denormalize(desc.normalize(value));
        prop_assert!((rt - value).abs() / value < 1e-3, "{} -> {}", value, rt);
    }

    /// Snapped values always lie in range and on the step grid.
    #[test]
    fn snap_lands_on_grid(value in -100.0f32..100.0f32) {
        let desc = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);
        let snapped = desc.snap(value);
        prop_assert!((-24.0..=24.0).contains(&snapped));
        let steps = (snapped - desc.min) / desc.step;
        prop_assert!((steps - steps.round()).abs() < 2e-3, "{} snapped to {}", value, snapped);
    }
}

#[test]
fn identity_section_never_modifies_signal() {
    let mut biquad = Biquad::with_coefficients(BiquadCoefficients::IDENTITY);
    for i in 0..256 {
        let x = (i as f32 * 0.37).sin();
        assert_eq!(biquad.process(x), x);
    }
}
