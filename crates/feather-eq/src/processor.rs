//! Top-level block processor: two channel chains fed from one snapshot.

use feather_core::{BiquadCoefficients, peaking_eq_coefficients};

use crate::chain::MonoChain;
use crate::layout::BAND_COUNT;
use crate::settings::{BandSettings, ChainSettings};

/// Sample rate used before the first `prepare`.
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Highest center frequency as a fraction of the sample rate.
pub const NYQUIST_LIMIT: f64 = 0.475;

/// Playback configuration handed to `prepare`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSpec {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest block the host will deliver.
    pub maximum_block_size: usize,
    /// Number of channels that will be processed.
    pub num_channels: usize,
}

impl ProcessSpec {
    /// Creates a playback configuration.
    pub const fn new(sample_rate: f64, maximum_block_size: usize, num_channels: usize) -> Self {
        Self {
            sample_rate,
            maximum_block_size,
            num_channels,
        }
    }
}

/// Derives one band's coefficients at `sample_rate`.
///
/// The center frequency is limited to `0.475 * sample_rate` first, so low
/// sample rates never place the bell at or above Nyquist.
pub fn band_coefficients(band: &BandSettings, sample_rate: f64) -> BiquadCoefficients {
    let max_freq = sample_rate * NYQUIST_LIMIT;
    let freq = f64::from(band.freq).min(max_freq);
    peaking_eq_coefficients(freq, f64::from(band.q), f64::from(band.gain_db), sample_rate)
}

/// Four-band stereo peaking equalizer.
///
/// Channel 0 runs through the left chain and channel 1 through the right
/// chain; both chains receive the same coefficients. A mono stream uses the
/// left chain only.
///
/// # Lifecycle
///
/// `new` → `prepare` → `process_block` (repeatedly) → `release`.
/// Coefficients are recomputed from the settings on `prepare` and on every
/// `process_block`.
///
/// # Example
///
/// ```rust
/// use feather_eq::{ChainSettings, PeakEq, ProcessSpec};
///
/// let mut eq = PeakEq::new();
/// let mut settings = ChainSettings::default();
/// settings.bands[0].freq = 1000.0;
/// settings.bands[0].gain_db = 12.0;
///
/// eq.prepare(&ProcessSpec::new(48000.0, 512, 2), &settings);
///
/// let mut left = vec![0.0f32; 512];
/// let mut right = vec![0.0f32; 512];
/// left[0] = 1.0;
/// right[0] = 1.0;
/// eq.process_block(&settings, &mut [&mut left[..], &mut right[..]], 2);
///
/// assert_eq!(left, right);
/// ```
#[derive(Debug, Clone)]
pub struct PeakEq {
    left: MonoChain,
    right: MonoChain,
    sample_rate: f64,
    maximum_block_size: usize,
    prepared: bool,
}

impl Default for PeakEq {
    fn default() -> Self {
        Self::new()
    }
}

impl PeakEq {
    /// Creates an unprepared processor with passthrough sections.
    pub fn new() -> Self {
        Self {
            left: MonoChain::new(),
            right: MonoChain::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            maximum_block_size: 0,
            prepared: false,
        }
    }

    /// Prepares for playback.
    ///
    /// Zeroes all delay state in both chains and derives coefficients from
    /// `settings` at the new sample rate. Call only while audio is stopped.
    pub fn prepare(&mut self, spec: &ProcessSpec, settings: &ChainSettings) {
        self.sample_rate = spec.sample_rate;
        self.maximum_block_size = spec.maximum_block_size;

        self.left.prepare(spec);
        self.right.prepare(spec);
        self.update_coefficients(settings);
        self.prepared = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = spec.sample_rate,
            max_block = spec.maximum_block_size,
            channels = spec.num_channels,
            "peak_eq: prepared"
        );
    }

    /// Releases playback resources. Delay state is cleared.
    pub fn release(&mut self) {
        self.left.reset();
        self.right.reset();
        self.prepared = false;

        #[cfg(feature = "tracing")]
        tracing::debug!("peak_eq: released");
    }

    /// Clears delay state without touching coefficients or sample rate.
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }

    /// Derives all four coefficient sets and assigns them to both chains.
    pub fn update_coefficients(&mut self, settings: &ChainSettings) {
        for band in 0..BAND_COUNT {
            let coeffs = band_coefficients(&settings.bands[band], self.sample_rate);
            self.left.set_coefficients(band, coeffs);
            self.right.set_coefficients(band, coeffs);
        }
    }

    /// Filters one channel in place with the current coefficients.
    ///
    /// Channel 0 uses the left chain, channel 1 the right chain. Other
    /// channels are left untouched.
    #[inline]
    pub fn process_channel(&mut self, channel: usize, samples: &mut [f32]) {
        match channel {
            0 => self.left.process_in_place(samples),
            1 => self.right.process_in_place(samples),
            _ => {}
        }
    }

    /// Processes one block.
    ///
    /// 1. Zeroes every channel at or beyond `num_inputs` (outputs with no
    ///    matching input).
    /// 2. Recomputes coefficients from `settings`.
    /// 3. Filters channels 0 and 1 in place.
    ///
    /// No allocation, no locks.
    pub fn process_block(
        &mut self,
        settings: &ChainSettings,
        channels: &mut [&mut [f32]],
        num_inputs: usize,
    ) {
        for channel in channels.iter_mut().skip(num_inputs) {
            channel.fill(0.0);
        }

        self.update_coefficients(settings);

        for (index, channel) in channels.iter_mut().enumerate().take(num_inputs.min(2)) {
            self.process_channel(index, channel);
        }
    }

    /// Magnitude response of the cascade at `frequency` Hz, in dB.
    pub fn magnitude_db(&self, frequency: f64) -> f64 {
        self.left.magnitude_db(frequency, self.sample_rate)
    }

    /// Current sample rate.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Largest block size announced by the last `prepare`.
    pub fn maximum_block_size(&self) -> usize {
        self.maximum_block_size
    }

    /// Whether `prepare` has been called since construction or `release`.
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// The left (channel 0) chain.
    pub fn left(&self) -> &MonoChain {
        &self.left
    }

    /// The right (channel 1) chain.
    pub fn right(&self) -> &MonoChain {
        &self.right
    }
}
