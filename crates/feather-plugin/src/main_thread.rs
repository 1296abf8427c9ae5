//! Main-thread plugin implementation.
//!
//! Answers parameter metadata queries, text conversion and audio port
//! configuration. Everything here runs on the host's main thread.

use clack_extensions::audio_ports::{
    AudioPortFlags, AudioPortInfo, AudioPortInfoWriter, AudioPortType, PluginAudioPortsImpl,
};
use clack_extensions::audio_ports_config::{
    AudioPortConfigWriter, AudioPortsConfiguration, MainPortInfo, PluginAudioPortsConfigImpl,
};
use clack_extensions::latency::PluginLatencyImpl;
use clack_extensions::params::{
    ParamDisplayWriter, ParamInfo, ParamInfoFlags, ParamInfoWriter, PluginMainThreadParams,
};
use clack_plugin::prelude::*;
use clack_plugin::utils::Cookie;
use feather_core::ParamFlags;
use feather_eq::{ChannelSet, FEATHER_EQ};

use crate::shared::FeatherShared;

/// Main-thread state of the plugin.
pub struct FeatherMainThread<'a> {
    shared: &'a FeatherShared,
}

impl<'a> FeatherMainThread<'a> {
    /// Create a new main-thread handler referencing the shared state.
    pub fn new(shared: &'a FeatherShared) -> Self {
        Self { shared }
    }

    fn handle_events(&mut self, input: &InputEvents) {
        for event in input {
            if let Some(clack_plugin::events::spaces::CoreEventSpace::ParamValue(ev)) =
                event.as_core_event()
                && let Some(param_id) = ev.param_id()
                && !self.shared.apply_param_event(param_id.get(), ev.value())
            {
                tracing::warn!(id = param_id.get(), "feather: event for unknown parameter");
            }
        }
    }
}

impl<'a> PluginMainThread<'a, FeatherShared> for FeatherMainThread<'a> {}

// ── Parameter Extension ─────────────────────────────────────────────────────

fn map_flags(flags: ParamFlags) -> ParamInfoFlags {
    if flags.contains(ParamFlags::AUTOMATABLE) {
        ParamInfoFlags::IS_AUTOMATABLE
    } else {
        ParamInfoFlags::empty()
    }
}

impl PluginMainThreadParams for FeatherMainThread<'_> {
    fn count(&mut self) -> u32 {
        self.shared.param_count() as u32
    }

    fn get_info(&mut self, param_index: u32, info: &mut ParamInfoWriter) {
        let index = param_index as usize;
        let (Some(desc), Some((min_value, max_value, default_value))) =
            (self.shared.descriptor(index), self.shared.host_range(index))
        else {
            return;
        };

        info.set(&ParamInfo {
            id: ClapId::new(desc.id.0),
            name: desc.name.as_bytes(),
            module: desc.group.as_bytes(),
            min_value,
            max_value,
            default_value,
            flags: map_flags(desc.flags),
            cookie: Cookie::default(),
        });
    }

    fn get_value(&mut self, param_id: ClapId) -> Option<f64> {
        let index = self.shared.index_by_id(param_id.get())?;
        self.shared.host_value(index)
    }

    fn value_to_text(
        &mut self,
        param_id: ClapId,
        value: f64,
        writer: &mut ParamDisplayWriter,
    ) -> core::fmt::Result {
        use core::fmt::Write;

        match self.shared.format_value(param_id.get(), value) {
            Some(text) => write!(writer, "{text}"),
            None => write!(writer, "{value:.2}"),
        }
    }

    fn text_to_value(&mut self, param_id: ClapId, text: &core::ffi::CStr) -> Option<f64> {
        let s = text.to_str().ok()?;
        let value = self.shared.parse_text(param_id.get(), s);
        if value.is_none() {
            tracing::info!(id = param_id.get(), text = s, "feather: rejected parameter text");
        }
        value
    }

    fn flush(&mut self, input: &InputEvents, _output: &mut OutputEvents) {
        self.handle_events(input);
    }
}

// ── Latency Extension ───────────────────────────────────────────────────────

impl PluginLatencyImpl for FeatherMainThread<'_> {
    fn get(&mut self) -> u32 {
        0
    }
}

// ── Audio Ports Extension ───────────────────────────────────────────────────

impl PluginAudioPortsImpl for FeatherMainThread<'_> {
    fn count(&mut self, _is_input: bool) -> u32 {
        1
    }

    fn get(&mut self, index: u32, is_input: bool, writer: &mut AudioPortInfoWriter) {
        if index != 0 {
            return;
        }
        let layout = self.shared.main_layout();
        let set = if is_input {
            layout.main_input
        } else {
            layout.main_output
        };
        let name: &[u8] = if is_input { b"Main In" } else { b"Main Out" };
        writer.set(&AudioPortInfo {
            id: ClapId::new(0),
            name,
            channel_count: set.size(),
            flags: AudioPortFlags::IS_MAIN,
            port_type: match set {
                ChannelSet::Mono => Some(AudioPortType::MONO),
                ChannelSet::Stereo => Some(AudioPortType::STEREO),
                _ => None,
            },
            in_place_pair: Some(ClapId::new(0)),
        });
    }
}

// ── Audio Ports Config Extension ────────────────────────────────────────────

impl PluginAudioPortsConfigImpl for FeatherMainThread<'_> {
    fn count(&mut self) -> u32 {
        FEATHER_EQ.supported_layouts().count() as u32
    }

    fn get(&mut self, index: u32, writer: &mut AudioPortConfigWriter) {
        let Some(layout) = FEATHER_EQ.supported_layouts().nth(index as usize) else {
            return;
        };
        let set = layout.main_output;
        let name: &[u8] = match set {
            ChannelSet::Mono => b"Mono",
            _ => b"Stereo",
        };
        let main_port = || MainPortInfo {
            channel_count: set.size(),
            port_type: match set {
                ChannelSet::Mono => Some(AudioPortType::MONO),
                _ => Some(AudioPortType::STEREO),
            },
        };
        writer.write(&AudioPortsConfiguration {
            id: ClapId::new(index),
            name,
            input_port_count: 1,
            output_port_count: 1,
            main_input: Some(main_port()),
            main_output: Some(main_port()),
        });
    }

    fn select(&mut self, config_id: ClapId) -> Result<(), PluginError> {
        let layout = FEATHER_EQ
            .supported_layouts()
            .nth(config_id.get() as usize)
            .ok_or(PluginError::Message("unknown audio port configuration"))?;
        if !self.shared.select_layout(layout) {
            return Err(PluginError::Message("unsupported audio port configuration"));
        }
        tracing::info!(channels = layout.main_output.size(), "feather: layout selected");
        Ok(())
    }
}
