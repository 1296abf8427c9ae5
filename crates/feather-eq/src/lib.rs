//! Feather EQ - four-band peaking equalizer engine
//!
//! Two channel chains of four RBJ peaking sections, fed from a lock-free
//! parameter store and recomputed every block.
//!
//! # Components
//!
//! - [`ParameterStore`] - twelve atomic parameters (Freq/Gain/Q × 4 bands)
//! - [`ChainSettings`] - per-block snapshot of the store
//! - [`MonoChain`] - one channel's four-section cascade
//! - [`PeakEq`] - block processor driving the left and right chains
//! - [`BuildConfig`] / [`BusesLayout`] - host-facing metadata and layout checks
//!
//! # Per-block flow
//!
//! ```text
//! store.snapshot() ──▶ band_coefficients() ×4 ──▶ left chain  ──▶ channel 0
//!                                              └─▶ right chain ──▶ channel 1
//! ```
//!
//! # Example
//!
//! ```rust
//! use feather_eq::{BandParam, ParameterStore, PeakEq, ProcessSpec, param_index};
//!
//! let store = ParameterStore::new();
//! store.set(param_index(0, BandParam::Gain), 6.0);
//!
//! let mut eq = PeakEq::new();
//! eq.prepare(&ProcessSpec::new(48000.0, 256, 2), &store.snapshot());
//!
//! let mut left = [0.1f32; 256];
//! let mut right = [0.1f32; 256];
//! eq.process_block(&store.snapshot(), &mut [&mut left[..], &mut right[..]], 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod bus;
pub mod chain;
pub mod info;
pub mod layout;
pub mod processor;
pub mod settings;
pub mod store;

pub use bus::{BusesLayout, ChannelSet};
pub use chain::MonoChain;
pub use info::{BuildConfig, FEATHER_EQ, PluginKind};
pub use layout::{BAND_COUNT, BandParam, PARAM_COUNT, PARAMS, param_index, split_index};
pub use processor::{NYQUIST_LIMIT, PeakEq, ProcessSpec, band_coefficients};
pub use settings::{BandSettings, ChainSettings};
pub use store::ParameterStore;
