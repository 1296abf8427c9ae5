//! Band settings snapshot.
//!
//! [`ChainSettings`] is the plain-value record the block processor reads
//! once per block. It also implements [`ParameterInfo`] so offline tools can
//! address its values through the same layout the host sees.

use feather_core::{ParamDescriptor, ParameterInfo};

use crate::layout::{
    self, BAND_COUNT, BandParam, DEFAULT_FREQS, DEFAULT_GAIN_DB, DEFAULT_Q, PARAM_COUNT,
};

/// Settings for one peaking band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSettings {
    /// Center frequency in Hz (20–20000).
    pub freq: f32,
    /// Gain in dB (-24–24).
    pub gain_db: f32,
    /// Quality factor (0.1–10).
    pub q: f32,
}

impl BandSettings {
    /// Creates band settings from plain values (no clamping).
    pub const fn new(freq: f32, gain_db: f32, q: f32) -> Self {
        Self { freq, gain_db, q }
    }

    /// Default settings for the zero-based `band`.
    ///
    /// Bands past the layout fall back to the last default frequency.
    pub fn default_for(band: usize) -> Self {
        let freq = DEFAULT_FREQS[band.min(BAND_COUNT - 1)];
        Self::new(freq, DEFAULT_GAIN_DB, DEFAULT_Q)
    }

    /// Reads one control.
    pub fn get(&self, param: BandParam) -> f32 {
        match param {
            BandParam::Freq => self.freq,
            BandParam::Gain => self.gain_db,
            BandParam::Q => self.q,
        }
    }

    /// Writes one control verbatim.
    pub fn set(&mut self, param: BandParam, value: f32) {
        match param {
            BandParam::Freq => self.freq = value,
            BandParam::Gain => self.gain_db = value,
            BandParam::Q => self.q = value,
        }
    }
}

/// The four band settings in band order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSettings {
    /// Band 1 through band 4.
    pub bands: [BandSettings; BAND_COUNT],
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            bands: core::array::from_fn(BandSettings::default_for),
        }
    }
}

impl ChainSettings {
    /// Settings for the zero-based `band`, if it exists.
    pub fn band(&self, band: usize) -> Option<&BandSettings> {
        self.bands.get(band)
    }

    /// Mutable settings for the zero-based `band`, if it exists.
    pub fn band_mut(&mut self, band: usize) -> Option<&mut BandSettings> {
        self.bands.get_mut(band)
    }
}

impl ParameterInfo for ChainSettings {
    fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        layout::descriptor(index).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        layout::split_index(index).map_or(0.0, |(band, param)| self.bands[band].get(param))
    }

    /// Clamps to range and snaps to the parameter's step grid.
    fn set_param(&mut self, index: usize, value: f32) {
        if let (Some((band, param)), Some(desc)) =
            (layout::split_index(index), layout::descriptor(index))
        {
            self.bands[band].set(param, desc.snap(value));
        }
    }
}
