//! CLAP plugin adapter for the Feather four-band equalizer.
//!
//! Bridges [`feather_eq`] to the CLAP format via the `clack-plugin` safe
//! wrapper. Building this crate produces `feather_plugin.clap` (rename the
//! `cdylib` output).
//!
//! # Architecture
//!
//! | Feather | CLAP |
//! |---------|------|
//! | `ParamId(u32)` | `clap_id` |
//! | `ParamDescriptor::group` | `module` |
//! | `ParamDescriptor::format_value()` | `value_to_text()` |
//! | `ParamDescriptor::parse_value()` | `text_to_value()` |
//! | `ParamFlags::AUTOMATABLE` | `CLAP_PARAM_IS_AUTOMATABLE` |
//! | `ParamScale::Power` parameter | normalized `0.0..=1.0` host value |
//! | `BuildConfig::supported_layouts()` | `audio-ports-config` entries |
//! | `PeakEq::prepare()` / `release()` | `activate()` / `deactivate()` |
//!
//! One main port pair is declared, in-place capable, with zero latency. It
//! is stereo until the host selects the mono configuration. Parameter state
//! is not persisted by the plugin.

// clack_export_entry! emits the exported C entry symbol.
#![allow(unsafe_code)]

pub mod audio;
pub mod channels;
pub mod main_thread;
pub mod shared;

pub use audio::FeatherAudioProcessor;
pub use channels::{PortChannel, render_channel};
pub use main_thread::FeatherMainThread;
pub use shared::FeatherShared;

use clack_extensions::audio_ports::PluginAudioPorts;
use clack_extensions::audio_ports_config::PluginAudioPortsConfig;
use clack_extensions::latency::PluginLatency;
use clack_extensions::params::PluginParams;
use clack_plugin::prelude::*;
use feather_eq::FEATHER_EQ;

/// Reverse-DNS plugin identifier.
pub const PLUGIN_ID: &str = "org.feather.eq";

/// The Feather EQ plugin type.
pub struct FeatherPlugin;

impl Plugin for FeatherPlugin {
    type AudioProcessor<'a> = FeatherAudioProcessor<'a>;
    type Shared<'a> = FeatherShared;
    type MainThread<'a> = FeatherMainThread<'a>;

    fn declare_extensions(builder: &mut PluginExtensions<Self>, _shared: Option<&FeatherShared>) {
        builder.register::<PluginAudioPorts>();
        builder.register::<PluginAudioPortsConfig>();
        builder.register::<PluginLatency>();
        builder.register::<PluginParams>();
    }
}

impl DefaultPluginFactory for FeatherPlugin {
    fn get_descriptor() -> PluginDescriptor {
        use clack_plugin::plugin::features::{AUDIO_EFFECT, EQUALIZER, MONO, STEREO};

        PluginDescriptor::new(PLUGIN_ID, FEATHER_EQ.name)
            .with_features([AUDIO_EFFECT, EQUALIZER, STEREO, MONO])
    }

    fn new_shared(_host: HostSharedHandle<'_>) -> Result<FeatherShared, PluginError> {
        tracing::info!(id = PLUGIN_ID, "feather: instance created");
        Ok(FeatherShared::new())
    }

    fn new_main_thread<'a>(
        _host: HostMainThreadHandle<'a>,
        shared: &'a FeatherShared,
    ) -> Result<FeatherMainThread<'a>, PluginError> {
        Ok(FeatherMainThread::new(shared))
    }
}

clack_plugin::clack_export_entry!(SinglePluginEntry<FeatherPlugin>);
