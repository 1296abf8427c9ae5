//! Per-channel buffer routing for the audio callback.
//!
//! A host hands each port channel over in one of four shapes. [`PortChannel`]
//! mirrors those shapes with plain slices so the routing in
//! [`render_channel`] does not depend on a live host.

use clack_plugin::prelude::ChannelPair;
use feather_eq::PeakEq;

/// One channel of a port pair, as provided by the host.
#[derive(Debug)]
pub enum PortChannel<'a> {
    /// Input and output share a buffer.
    InPlace(&'a mut [f32]),
    /// Separate input and output buffers.
    Separate(&'a [f32], &'a mut [f32]),
    /// Output with no matching input.
    OutputOnly(&'a mut [f32]),
    /// Input with no matching output; nothing to write.
    InputOnly,
}

impl<'a> From<ChannelPair<'a, f32>> for PortChannel<'a> {
    fn from(pair: ChannelPair<'a, f32>) -> Self {
        match pair {
            ChannelPair::InPlace(buf) => Self::InPlace(buf),
            ChannelPair::InputOutput(input, output) => Self::Separate(input, output),
            ChannelPair::OutputOnly(output) => Self::OutputOnly(output),
            _ => Self::InputOnly,
        }
    }
}

/// Filters channel `index` of the main port.
///
/// Separate buffers are copied first, and output samples past the end of the
/// input are zeroed. Outputs without an input are cleared. Channels past the
/// second pass through unfiltered.
pub fn render_channel(eq: &mut PeakEq, index: usize, channel: PortChannel<'_>) {
    match channel {
        PortChannel::InPlace(buf) => eq.process_channel(index, buf),
        PortChannel::Separate(input, output) => {
            let len = input.len().min(output.len());
            output[..len].copy_from_slice(&input[..len]);
            output[len..].fill(0.0);
            eq.process_channel(index, &mut output[..len]);
        }
        PortChannel::OutputOnly(output) => output.fill(0.0),
        PortChannel::InputOnly => {}
    }
}
