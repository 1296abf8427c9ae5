//! Audio processor for the Feather CLAP plugin.
//!
//! Handles the real-time callback: applies parameter events from the host,
//! snapshots the store, recomputes coefficients and filters the main port.

use clack_extensions::params::PluginAudioProcessorParams;
use clack_plugin::prelude::*;
use feather_eq::{PeakEq, ProcessSpec};

use crate::channels::{PortChannel, render_channel};
use crate::main_thread::FeatherMainThread;
use crate::shared::FeatherShared;

/// Audio-thread processor.
///
/// Created during `activate()`, destroyed during `deactivate()`.
pub struct FeatherAudioProcessor<'a> {
    shared: &'a FeatherShared,
    eq: PeakEq,
}

impl<'a> PluginAudioProcessor<'a, FeatherShared, FeatherMainThread<'a>>
    for FeatherAudioProcessor<'a>
{
    fn activate(
        _host: HostAudioProcessorHandle<'a>,
        _main_thread: &mut FeatherMainThread<'a>,
        shared: &'a FeatherShared,
        audio_config: PluginAudioConfiguration,
    ) -> Result<Self, PluginError> {
        let channels = shared.main_layout().main_output.size();
        let spec = ProcessSpec::new(
            audio_config.sample_rate,
            audio_config.max_frames_count as usize,
            channels as usize,
        );

        let mut eq = PeakEq::new();
        eq.prepare(&spec, &shared.snapshot());

        tracing::info!(
            sample_rate = audio_config.sample_rate,
            max_frames = audio_config.max_frames_count,
            channels,
            "feather: activated"
        );

        Ok(Self { shared, eq })
    }

    fn process(
        &mut self,
        _process: Process,
        mut audio: Audio,
        events: Events,
    ) -> Result<ProcessStatus, PluginError> {
        self.handle_events(events.input);
        self.eq.update_coefficients(&self.shared.snapshot());
        self.process_audio(&mut audio)?;

        Ok(ProcessStatus::ContinueIfNotQuiet)
    }

    fn deactivate(mut self, _main_thread: &mut FeatherMainThread<'_>) {
        self.eq.release();
        tracing::info!("feather: deactivated");
    }

    fn reset(&mut self) {
        self.eq.reset();
    }
}

impl FeatherAudioProcessor<'_> {
    /// Writes incoming parameter events into the shared store.
    fn handle_events(&mut self, input: &InputEvents) {
        for event in input {
            if let Some(clack_plugin::events::spaces::CoreEventSpace::ParamValue(ev)) =
                event.as_core_event()
                && let Some(param_id) = ev.param_id()
            {
                self.shared.apply_param_event(param_id.get(), ev.value());
            }
        }
    }

    fn process_audio(&mut self, audio: &mut Audio) -> Result<(), PluginError> {
        for mut port_pair in audio {
            let channels = port_pair.channels()?;

            // Extract f32 channels, skip f64-only ports.
            let Some(mut channels) = channels.into_f32() else {
                continue;
            };

            for index in 0..channels.channel_pair_count() {
                if let Some(pair) = channels.channel_pair(index) {
                    render_channel(&mut self.eq, index, PortChannel::from(pair));
                }
            }
        }

        Ok(())
    }
}

impl PluginAudioProcessorParams for FeatherAudioProcessor<'_> {
    fn flush(&mut self, input: &InputEvents, _output: &mut OutputEvents) {
        self.handle_events(input);
    }
}
