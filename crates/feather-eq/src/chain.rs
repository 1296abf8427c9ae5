//! Per-channel cascade of four peaking sections.

use feather_core::{Biquad, BiquadCoefficients};

use crate::layout::BAND_COUNT;
use crate::processor::ProcessSpec;

/// Four biquad sections in series (band 1 → band 4) for one channel.
///
/// Each channel owns its own chain, so delay state never crosses channels.
/// Coefficients are assigned from outside by the block processor.
#[derive(Debug, Clone, Default)]
pub struct MonoChain {
    sections: [Biquad; BAND_COUNT],
}

impl MonoChain {
    /// Creates a chain of passthrough sections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepares for playback: zeroes every delay register.
    ///
    /// A chain has no rate-dependent state of its own; `_spec` is unused.
    pub fn prepare(&mut self, _spec: &ProcessSpec) {
        self.reset();
    }

    /// Replaces the coefficients of one section, keeping its delay state.
    ///
    /// `band` is zero-based; indices past the last band are ignored.
    #[inline]
    pub fn set_coefficients(&mut self, band: usize, coeffs: BiquadCoefficients) {
        if let Some(section) = self.sections.get_mut(band) {
            section.set_coefficients(coeffs);
        }
    }

    /// Coefficients of one section.
    pub fn coefficients(&self, band: usize) -> Option<&BiquadCoefficients> {
        self.sections.get(band).map(Biquad::coefficients)
    }

    /// Runs `samples` through all four sections in order, in place.
    ///
    /// Sections are applied one block at a time; for a cascade of linear
    /// sections this gives the same result as a per-sample pass.
    #[inline]
    pub fn process_in_place(&mut self, samples: &mut [f32]) {
        for section in &mut self.sections {
            section.process_block_inplace(samples);
            section.snap_to_zero();
        }
    }

    /// Clears all delay state. Coefficients are kept.
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.clear();
        }
    }

    /// Returns `true` when every section's delay state is zero.
    pub fn is_cleared(&self) -> bool {
        self.sections.iter().all(Biquad::is_cleared)
    }

    /// Magnitude response of the whole cascade at `frequency` Hz, in dB.
    pub fn magnitude_db(&self, frequency: f64, sample_rate: f64) -> f64 {
        self.sections
            .iter()
            .map(|s| s.coefficients().magnitude_db(frequency, sample_rate))
            .sum()
    }
}
