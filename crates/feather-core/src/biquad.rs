//! Biquad (bi-quadratic) filter structure.
//!
//! Provides a second-order IIR section with normalized coefficients and the
//! RBJ Audio EQ Cookbook peaking design used by the equalizer bands.
//!
//! Coefficients are designed in `f64` from the host's `f64` sample rate and
//! stored as `f32` for processing. Narrow bells far below the sample rate
//! (tens of Hz at 192 kHz) are limited by that `f32` storage: their
//! measured peak gain falls short of the requested gain.

use core::f64::consts::PI;
use libm::{cos, pow, sin, sqrt};

use crate::math::flush_denormal;

/// Normalized biquad coefficients (`a0 == 1`).
///
/// Transfer function:
/// ```text
///         b0 + b1*z^-1 + b2*z^-2
/// H(z) = ------------------------
///          1 + a1*z^-1 + a2*z^-2
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    /// Feedforward coefficient for `x[n]`.
    pub b0: f32,
    /// Feedforward coefficient for `x[n-1]`.
    pub b1: f32,
    /// Feedforward coefficient for `x[n-2]`.
    pub b2: f32,
    /// Feedback coefficient for `y[n-1]`.
    pub a1: f32,
    /// Feedback coefficient for `y[n-2]`.
    pub a2: f32,
}

impl BiquadCoefficients {
    /// Passthrough coefficients: `y[n] = x[n]`.
    pub const IDENTITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Builds normalized coefficients from the raw cookbook form.
    ///
    /// Divides every term by `a0`.
    pub fn from_raw(b0: f64, b1: f64, b2: f64, a0: f64, a1: f64, a2: f64) -> Self {
        let a0_inv = 1.0 / a0;
        Self {
            b0: (b0 * a0_inv) as f32,
            b1: (b1 * a0_inv) as f32,
            b2: (b2 * a0_inv) as f32,
            a1: (a1 * a0_inv) as f32,
            a2: (a2 * a0_inv) as f32,
        }
    }

    /// Linear magnitude of the frequency response at `frequency` Hz.
    ///
    /// Evaluates `|H(e^jw)|` analytically; no filter state is involved.
    pub fn magnitude(&self, frequency: f64, sample_rate: f64) -> f64 {
        let omega = 2.0 * PI * frequency / sample_rate;
        let (c1, s1) = (cos(omega), sin(omega));
        let (c2, s2) = (cos(2.0 * omega), sin(2.0 * omega));

        let (b0, b1, b2) = (f64::from(self.b0), f64::from(self.b1), f64::from(self.b2));
        let (a1, a2) = (f64::from(self.a1), f64::from(self.a2));

        let num_re = b0 + b1 * c1 + b2 * c2;
        let num_im = -(b1 * s1 + b2 * s2);
        let den_re = 1.0 + a1 * c1 + a2 * c2;
        let den_im = -(a1 * s1 + a2 * s2);

        sqrt((num_re * num_re + num_im * num_im) / (den_re * den_re + den_im * den_im))
    }

    /// Magnitude of the frequency response at `frequency` Hz, in decibels.
    pub fn magnitude_db(&self, frequency: f64, sample_rate: f64) -> f64 {
        20.0 * libm::log10(self.magnitude(frequency, sample_rate).max(1e-12))
    }
}

impl Default for BiquadCoefficients {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Second-order IIR section: coefficients plus delay state.
///
/// Implements the Direct Form I structure:
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
///                - a1*y[n-1] - a2*y[n-2]
/// ```
///
/// Coefficients can be swapped at any time without touching the delay
/// registers, so a running signal continues through the new response.
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: BiquadCoefficients,

    /// Input delay line: x[n-1], x[n-2]
    x1: f32,
    x2: f32,

    /// Output delay line: y[n-1], y[n-2]
    y1: f32,
    y2: f32,
}

impl Biquad {
    /// Creates a new biquad with passthrough coefficients.
    ///
    /// Initial state: `y[n] = x[n]` (no filtering)
    pub fn new() -> Self {
        Self::with_coefficients(BiquadCoefficients::IDENTITY)
    }

    /// Creates a biquad with the given coefficients and cleared state.
    pub fn with_coefficients(coeffs: BiquadCoefficients) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Replaces the coefficients. Delay state is kept.
    #[inline]
    pub fn set_coefficients(&mut self, coeffs: BiquadCoefficients) {
        self.coeffs = coeffs;
    }

    /// Current coefficients.
    pub fn coefficients(&self) -> &BiquadCoefficients {
        &self.coeffs
    }

    /// Processes a single sample through the biquad filter.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let c = &self.coeffs;
        let output = c.b0 * input + c.b1 * self.x1 + c.b2 * self.x2
            - c.a1 * self.y1
            - c.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Processes a buffer in place.
    #[inline]
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clears the filter state (delay lines).
    ///
    /// Coefficients are left unchanged.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Flushes near-denormal values in the delay registers to zero.
    ///
    /// Called once per block so a decaying tail never lands in the
    /// subnormal range.
    pub fn snap_to_zero(&mut self) {
        self.x1 = flush_denormal(self.x1);
        self.x2 = flush_denormal(self.x2);
        self.y1 = flush_denormal(self.y1);
        self.y2 = flush_denormal(self.y2);
    }

    /// Returns `true` when every delay register is exactly zero.
    pub fn is_cleared(&self) -> bool {
        self.x1 == 0.0 && self.x2 == 0.0 && self.y1 == 0.0 && self.y2 == 0.0
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculates peaking EQ filter coefficients using the RBJ cookbook formula.
///
/// A peaking EQ boosts or cuts around a center frequency with a specified
/// bandwidth. The linear gain at the center is `10^(gain_db/20)`; far from
/// the center the response returns to unity.
///
/// # Arguments
///
/// * `frequency` - Center frequency in Hz (must be below Nyquist)
/// * `q` - Q factor (bandwidth = frequency / Q, must be > 0)
/// * `gain_db` - Gain in decibels (positive = boost, negative = cut)
/// * `sample_rate` - Sample rate in Hz
pub fn peaking_eq_coefficients(
    frequency: f64,
    q: f64,
    gain_db: f64,
    sample_rate: f64,
) -> BiquadCoefficients {
    let a = sqrt(pow(10.0, gain_db / 20.0));
    let omega = 2.0 * PI * frequency / sample_rate;
    let cos_omega = cos(omega);
    let alpha = sin(omega) / (2.0 * q);

    let b0 = 1.0 + alpha * a;
    let b1 = -2.0 * cos_omega;
    let b2 = 1.0 - alpha * a;
    let a0 = 1.0 + alpha / a;
    let a1 = -2.0 * cos_omega;
    let a2 = 1.0 - alpha / a;

    BiquadCoefficients::from_raw(b0, b1, b2, a0, a1, a2)
}
