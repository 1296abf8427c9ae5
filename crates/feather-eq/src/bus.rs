//! Channel sets and bus layouts offered by a host.

/// Channel configuration of one bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelSet {
    /// Bus is not connected.
    #[default]
    Disabled,
    /// One channel.
    Mono,
    /// Left and right.
    Stereo,
    /// Any other channel count.
    Discrete(u32),
}

impl ChannelSet {
    /// Builds a channel set from a raw channel count.
    pub const fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Disabled,
            1 => Self::Mono,
            2 => Self::Stereo,
            n => Self::Discrete(n),
        }
    }

    /// Number of channels.
    pub const fn size(self) -> u32 {
        match self {
            Self::Disabled => 0,
            Self::Mono => 1,
            Self::Stereo => 2,
            Self::Discrete(n) => n,
        }
    }

    /// `true` for mono or stereo.
    pub const fn is_mono_or_stereo(self) -> bool {
        matches!(self, Self::Mono | Self::Stereo)
    }
}

/// Main input and output bus configuration proposed by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BusesLayout {
    /// Main input bus.
    pub main_input: ChannelSet,
    /// Main output bus.
    pub main_output: ChannelSet,
}

impl BusesLayout {
    /// Creates a layout from input and output channel sets.
    pub const fn new(main_input: ChannelSet, main_output: ChannelSet) -> Self {
        Self {
            main_input,
            main_output,
        }
    }

    /// Same channel set on input and output.
    pub const fn symmetric(set: ChannelSet) -> Self {
        Self::new(set, set)
    }
}
