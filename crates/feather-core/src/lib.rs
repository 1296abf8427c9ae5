//! Feather Core - DSP primitives for the Feather equalizer
//!
//! This crate provides the building blocks the equalizer is assembled from,
//! designed for real-time audio processing with zero allocation in the audio
//! path.
//!
//! # Filters
//!
//! - [`Biquad`] - Second-order IIR section (Direct Form I)
//! - [`BiquadCoefficients`] - Normalized coefficient set with analytic response
//! - [`peaking_eq_coefficients`] - RBJ cookbook peaking (bell) design
//!
//! # Parameters
//!
//! - [`ParameterInfo`] - Index/name/ID addressable parameter introspection
//! - [`ParamDescriptor`] - Range, step, unit and normalization curve
//!
//! # Utilities
//!
//! - Math functions: [`linear_to_db`], [`flush_denormal`]
//!
//! # no_std Support
//!
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! feather-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use feather_core::{Biquad, peaking_eq_coefficients};
//!
//! let mut band = Biquad::with_coefficients(peaking_eq_coefficients(1000.0, 1.0, 6.0, 48000.0));
//!
//! let mut block = [0.0f32; 64];
//! block[0] = 1.0;
//! band.process_block_inplace(&mut block);
//! assert!(block[0] > 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod math;
pub mod param_info;

pub use biquad::{Biquad, BiquadCoefficients, peaking_eq_coefficients};
pub use math::{flush_denormal, linear_to_db};
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamScale, ParamUnit, ParameterInfo};
