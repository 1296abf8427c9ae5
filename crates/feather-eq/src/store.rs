//! Lock-free parameter storage shared between host threads.
//!
//! Each parameter is an `AtomicU32` holding the bits of an `f32`. Writers
//! (host main thread, automation) and the audio-thread reader never block
//! each other. A snapshot reads each parameter independently, so it may mix
//! values from before and after a concurrent write; that is acceptable for
//! an equalizer.

use core::sync::atomic::{AtomicU32, Ordering};

use feather_core::{ParamDescriptor, ParamId, ParameterInfo};

use crate::layout::{self, PARAM_COUNT, PARAMS};
use crate::settings::ChainSettings;

/// Current value of every parameter, as atomics.
#[derive(Debug)]
pub struct ParameterStore {
    values: [AtomicU32; PARAM_COUNT],
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore {
    /// Creates a store with every parameter at its default.
    pub fn new() -> Self {
        Self {
            values: core::array::from_fn(|i| AtomicU32::new(PARAMS[i].default.to_bits())),
        }
    }

    /// Number of parameters.
    pub const fn len(&self) -> usize {
        PARAM_COUNT
    }

    /// Always `false`; the layout is fixed.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Descriptor for the parameter at `index`.
    pub fn descriptor(&self, index: usize) -> Option<&'static ParamDescriptor> {
        layout::descriptor(index)
    }

    /// Finds a parameter index by stable ID.
    pub fn index_by_id(&self, id: ParamId) -> Option<usize> {
        layout::index_by_id(id)
    }

    /// Reads the current value of a parameter (lock-free).
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values
            .get(index)
            .map(|v| f32::from_bits(v.load(Ordering::Acquire)))
    }

    /// Writes a parameter value (lock-free).
    ///
    /// The value is clamped to the descriptor's range and snapped to its
    /// step grid. Out-of-range indices are ignored.
    pub fn set(&self, index: usize, value: f32) {
        if let Some((atomic, desc)) = self.values.get(index).zip(PARAMS.get(index)) {
            atomic.store(desc.snap(value).to_bits(), Ordering::Release);
        }
    }

    /// Writes a value given in normalized \[0, 1\] space.
    pub fn set_normalized(&self, index: usize, normalized: f32) {
        if let Some(desc) = PARAMS.get(index) {
            self.set(index, desc.denormalize(normalized));
        }
    }

    /// Reads a value in normalized \[0, 1\] space.
    pub fn get_normalized(&self, index: usize) -> Option<f32> {
        let desc = PARAMS.get(index)?;
        self.get(index).map(|v| desc.normalize(v))
    }

    /// Resets every parameter to its default.
    pub fn reset_to_defaults(&self) {
        for (atomic, desc) in self.values.iter().zip(PARAMS.iter()) {
            atomic.store(desc.default.to_bits(), Ordering::Release);
        }
    }

    /// Reads all twelve values into a [`ChainSettings`] record.
    ///
    /// Safe to call from the audio thread while other threads write.
    pub fn snapshot(&self) -> ChainSettings {
        let mut settings = ChainSettings::default();
        for (index, atomic) in self.values.iter().enumerate() {
            if let Some((band, param)) = layout::split_index(index) {
                settings.bands[band].set(param, f32::from_bits(atomic.load(Ordering::Acquire)));
            }
        }
        settings
    }

    /// Writes every value of `settings` (clamped and snapped).
    pub fn load(&self, settings: &ChainSettings) {
        for index in 0..PARAM_COUNT {
            self.set(index, settings.get_param(index));
        }
    }
}
