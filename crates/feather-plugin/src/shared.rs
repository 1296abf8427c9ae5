//! Thread-safe shared state for the Feather CLAP plugin.
//!
//! `FeatherShared` lives for the lifetime of the plugin instance and is
//! reachable from the main thread (parameter queries, flush) and the audio
//! thread (processing). Values live in a [`ParameterStore`], so neither side
//! ever blocks.
//!
//! # Host values
//!
//! Linear parameters (gain, Q) are exposed to the host in their plain range.
//! Skewed parameters (frequency) are exposed as normalized `0.0..=1.0` so the
//! host's knobs and automation lanes follow the skew curve; the conversion to
//! hertz happens here.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use feather_core::{ParamDescriptor, ParamId, ParamScale};
use feather_eq::{BusesLayout, ChainSettings, ChannelSet, FEATHER_EQ, PARAMS, ParameterStore};

/// Shared state accessible from all plugin threads.
///
/// Wraps an `Arc<ParameterStore>` so it can be cloned cheaply into anything
/// that needs to outlive a borrow of the plugin instance.
#[derive(Clone)]
pub struct FeatherShared {
    store: Arc<ParameterStore>,
    /// Channel count of the selected symmetric main layout.
    main_channels: Arc<AtomicU32>,
}

impl Default for FeatherShared {
    fn default() -> Self {
        Self {
            store: Arc::default(),
            main_channels: Arc::new(AtomicU32::new(ChannelSet::Stereo.size())),
        }
    }
}

/// Whether the host sees this parameter in normalized space.
fn host_normalized(desc: &ParamDescriptor) -> bool {
    !matches!(desc.scale, ParamScale::Linear)
}

/// Host value to plain parameter value.
fn to_plain(desc: &ParamDescriptor, host: f64) -> f32 {
    if host_normalized(desc) {
        desc.denormalize(host as f32)
    } else {
        host as f32
    }
}

/// Plain parameter value to host value.
fn to_host(desc: &ParamDescriptor, plain: f32) -> f64 {
    if host_normalized(desc) {
        f64::from(desc.normalize(plain))
    } else {
        f64::from(plain)
    }
}

impl FeatherShared {
    /// Creates shared state with every parameter at its default and a
    /// stereo main layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Underlying parameter store.
    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// Number of parameters.
    pub fn param_count(&self) -> usize {
        self.store.len()
    }

    /// Parameter descriptor by index.
    pub fn descriptor(&self, index: usize) -> Option<&'static ParamDescriptor> {
        self.store.descriptor(index)
    }

    /// All parameter descriptors, in host order.
    pub fn descriptors(&self) -> &'static [ParamDescriptor] {
        &PARAMS
    }

    /// Finds a parameter index by its CLAP id.
    pub fn index_by_id(&self, id: u32) -> Option<usize> {
        self.store.index_by_id(ParamId(id))
    }

    /// Reads the current plain value of a parameter (lock-free).
    pub fn get_value(&self, index: usize) -> Option<f32> {
        self.store.get(index)
    }

    /// Writes a plain parameter value (lock-free). Clamped and snapped to the
    /// parameter's step.
    pub fn set_value(&self, index: usize, value: f32) {
        self.store.set(index, value);
    }

    /// `(min, max, default)` as declared to the host.
    pub fn host_range(&self, index: usize) -> Option<(f64, f64, f64)> {
        let desc = self.descriptor(index)?;
        Some(if host_normalized(desc) {
            (0.0, 1.0, to_host(desc, desc.default))
        } else {
            (f64::from(desc.min), f64::from(desc.max), f64::from(desc.default))
        })
    }

    /// Current value of a parameter in the host's domain.
    pub fn host_value(&self, index: usize) -> Option<f64> {
        let desc = self.descriptor(index)?;
        if host_normalized(desc) {
            self.store.get_normalized(index).map(f64::from)
        } else {
            self.get_value(index).map(f64::from)
        }
    }

    /// Applies a host parameter event addressed by CLAP id.
    ///
    /// `value` is in the host's domain. Returns `false` when the id is
    /// unknown and the event was dropped.
    pub fn apply_param_event(&self, id: u32, value: f64) -> bool {
        let Some(index) = self.index_by_id(id) else {
            return false;
        };
        match self.descriptor(index) {
            Some(desc) if host_normalized(desc) => {
                self.store.set_normalized(index, value as f32);
            }
            _ => self.set_value(index, value as f32),
        }
        true
    }

    /// Display text for the host-domain `value` of the parameter with CLAP
    /// id `id`.
    pub fn format_value(&self, id: u32, value: f64) -> Option<String> {
        let desc = self.descriptor(self.index_by_id(id)?)?;
        Some(desc.format_value(to_plain(desc, value)))
    }

    /// Parses host text entry for the parameter with CLAP id `id` into a
    /// host-domain value.
    ///
    /// Accepts a bare number or one carrying the unit (`"2.5 kHz"`,
    /// `"-3 dB"`). The plain result is clamped to range.
    pub fn parse_text(&self, id: u32, text: &str) -> Option<f64> {
        let desc = self.descriptor(self.index_by_id(id)?)?;
        desc.parse_value(text).map(|plain| to_host(desc, plain))
    }

    /// Per-block snapshot of every band.
    pub fn snapshot(&self) -> ChainSettings {
        self.store.snapshot()
    }

    /// Currently selected main bus layout.
    pub fn main_layout(&self) -> BusesLayout {
        BusesLayout::symmetric(ChannelSet::from_count(
            self.main_channels.load(Ordering::Acquire),
        ))
    }

    /// Switches the main bus layout.
    ///
    /// Returns `false` and keeps the current layout when the build refuses
    /// `layout`.
    pub fn select_layout(&self, layout: BusesLayout) -> bool {
        if !FEATHER_EQ.is_layout_supported(&layout) {
            return false;
        }
        self.main_channels
            .store(layout.main_output.size(), Ordering::Release);
        true
    }
}

impl clack_plugin::prelude::PluginShared<'_> for FeatherShared {}
