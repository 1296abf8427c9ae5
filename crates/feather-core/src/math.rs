//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! - [`linear_to_db`] - Convert linear gain to decibels
//! - [`flush_denormal`] - Denormal protection for filter state

use libm::logf;

/// Convert linear gain to decibels.
///
/// Inputs at or below `1e-10` are treated as `1e-10` (-200 dB).
///
/// # Example
/// ```rust
/// use feather_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Flush values below 1e-20 to zero.
///
/// Recursive filters decay toward zero indefinitely; once their state enters
/// the IEEE 754 subnormal range arithmetic slows down by up to 100x on most
/// architectures. 1e-20 leaves margin before that range begins.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
