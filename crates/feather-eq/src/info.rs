//! Build-time plugin metadata and layout negotiation.
//!
//! The plugin category is a value of [`PluginKind`] inside a const
//! [`BuildConfig`], so every metadata query is an ordinary branch.

use crate::bus::{BusesLayout, ChannelSet};

/// Main bus layouts offered to hosts, in preference order.
const MAIN_LAYOUTS: [BusesLayout; 2] = [
    BusesLayout::symmetric(ChannelSet::Stereo),
    BusesLayout::symmetric(ChannelSet::Mono),
];

/// Category a plugin build declares to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    /// Audio in, audio out.
    Effect,
    /// Audio out only; input layout is free.
    Synth,
    /// MIDI processing; accepts any audio layout.
    MidiEffect,
}

/// Static description of a plugin build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    /// Display name.
    pub name: &'static str,
    /// Plugin category.
    pub kind: PluginKind,
    /// Whether MIDI input is accepted.
    pub accepts_midi: bool,
    /// Whether MIDI output is produced.
    pub produces_midi: bool,
    /// Whether a custom editor exists.
    pub has_editor: bool,
    /// Tail length in seconds after input stops.
    pub tail_seconds: f64,
    /// Number of programs.
    pub num_programs: usize,
}

/// Metadata of the Feather EQ build.
pub const FEATHER_EQ: BuildConfig = BuildConfig {
    name: "Feather EQ",
    kind: PluginKind::Effect,
    accepts_midi: false,
    produces_midi: false,
    has_editor: false,
    tail_seconds: 0.0,
    num_programs: 1,
};

impl BuildConfig {
    /// Whether the host-proposed layout can be processed.
    ///
    /// MIDI effects accept anything. Otherwise the output must be mono or
    /// stereo and, unless this is a synth, the input must match the output.
    pub fn is_layout_supported(&self, layout: &BusesLayout) -> bool {
        if self.kind == PluginKind::MidiEffect {
            return true;
        }
        if !layout.main_output.is_mono_or_stereo() {
            return false;
        }
        self.kind == PluginKind::Synth || layout.main_input == layout.main_output
    }

    /// Main bus layouts this build accepts, in preference order.
    ///
    /// The position of a layout is its configuration id on the host side.
    pub fn supported_layouts(&self) -> impl Iterator<Item = BusesLayout> + '_ {
        MAIN_LAYOUTS
            .into_iter()
            .filter(|layout| self.is_layout_supported(layout))
    }

    /// Whether this build is a MIDI effect.
    pub fn is_midi_effect(&self) -> bool {
        self.kind == PluginKind::MidiEffect
    }

    /// Index of the active program. There is only ever one.
    pub const fn current_program(&self) -> usize {
        0
    }

    /// Selects a program. Program switching has no effect.
    ///
    /// Returns `true` when `index` names an existing program.
    pub fn select_program(&self, index: usize) -> bool {
        index < self.num_programs
    }

    /// Name of the program at `index`; the single program is unnamed.
    pub fn program_name(&self, index: usize) -> Option<&'static str> {
        (index < self.num_programs).then_some("")
    }
}
