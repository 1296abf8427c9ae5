//! Parameter introspection for host-automatable parameters.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that
//! describe a processor's parameters to the outside world:
//!
//! - **Plugin hosts**: CLAP parameter info, value/text conversion
//! - **Configuration files**: validate values loaded from disk
//! - **Command-line tools**: set parameters by name
//!
//! # Design
//!
//! Parameters are addressed by zero-based index. Each one is described by a
//! [`ParamDescriptor`] carrying display metadata, range, step, default and:
//!
//! - [`ParamId`] - stable numeric ID for host automation
//! - [`ParamScale`] - normalization curve (linear or skewed power curve)
//! - [`ParamFlags`] - capability flags for plugin hosts
//! - `string_id` - human-readable stable ID for debugging and serialization
//! - `group` - parameter grouping for host tree display
//!
//! # Example
//!
//! ```rust
//! use feather_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Trim {
//!     gain_db: f32,
//! }
//!
//! impl ParameterInfo for Trim {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::gain_db("Trim", "Trim", -24.0, 24.0, 0.0)
//!                 .with_id(ParamId(1), "trim")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.gain_db,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if let Some(desc) = self.param_info(index) {
//!             self.gain_db = desc.clamp(value);
//!         }
//!     }
//! }
//!
//! let mut trim = Trim { gain_db: 0.0 };
//! trim.set_param(0, 40.0);
//! assert_eq!(trim.get_param(0), 24.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Scaling curve for parameter normalization.
///
/// Determines how a parameter's plain value maps to normalized \[0.0, 1.0\]
/// space (the space host automation works in).
///
/// # Normalization Formulas
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Power(exp)**: `normalized = ((value - min) / (max - min)).powf(1.0 / exp)`
///
/// `Power(exp)` is the same curve as a JUCE `NormalisableRange` with
/// `skew = 1 / exp`; see [`ParamScale::skew`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Power curve mapping with configurable exponent.
    /// exponent > 1.0 → more resolution at the low end.
    Power(f32),
}

impl ParamScale {
    /// Builds the scale for a JUCE-style skew factor.
    ///
    /// A skew of `1.0` is linear; `0.25` spreads 20 Hz–20 kHz so that the
    /// normalized midpoint sits near 1.27 kHz.
    pub fn skew(skew: f32) -> Self {
        if skew == 1.0 {
            Self::Linear
        } else {
            Self::Power(1.0 / skew)
        }
    }
}

/// Stable parameter identifier that survives reordering.
///
/// Used by plugin hosts for automation recording and parameter mapping. Once
/// assigned, a `ParamId` must never change for a given parameter.
///
/// Maps directly to CLAP `clap_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for plugin host communication.
///
/// Bitflag type that maps to CLAP `clap_param_info_flags`.
///
/// # Example
///
/// ```rust
/// use feather_core::ParamFlags;
///
/// let flags = ParamFlags::default();
/// assert!(flags.contains(ParamFlags::AUTOMATABLE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// Host can automate this parameter (default for all params).
    pub const AUTOMATABLE: Self = Self(1 << 0);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for types that expose introspectable parameters.
///
/// # Parameter Indexing
///
/// Parameters are accessed by zero-based index. The index must be stable for
/// the lifetime of the instance. Use [`param_count`](Self::param_count) to
/// determine valid indices.
///
/// # Thread Safety
///
/// This trait does not require thread safety. Values shared between a host's
/// main thread and its audio thread live in atomics, not behind this trait.
pub trait ParameterInfo {
    /// Returns the number of parameters.
    ///
    /// Valid parameter indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` if `index >= param_count()`.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations clamp the value to the descriptor's range. Out-of-bounds
    /// indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`], [`ParamDescriptor::short_name`]
    /// and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Returns the stable [`ParamId`] for the parameter at the given index.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Finds a parameter index by its stable [`ParamId`].
    ///
    /// Scans all parameters linearly. Use on setup paths, not in audio callbacks.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Step Size
///
/// `step` is the legal value grid, anchored at `min`. Host writes are snapped
/// to it with [`snap`](Self::snap). A step of `0.0` means continuous.
///
/// # Example
///
/// ```rust
/// use feather_core::{ParamDescriptor, ParamId};
///
/// let gain = ParamDescriptor::gain_db("Gain 1", "Gain 1", -24.0, 24.0, 0.0)
///     .with_id(ParamId(101), "gain_1");
///
/// assert_eq!(gain.snap(3.3), 3.5);
/// assert_eq!(gain.format_value(3.5), "+3.5 dB");
/// assert_eq!(gain.parse_value("-6 dB"), Some(-6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Freq 1").
    pub name: &'static str,

    /// Short name for narrow displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the processor is created.
    pub default: f32,

    /// Legal value interval, anchored at `min` (`0.0` = continuous).
    pub step: f32,

    /// Stable numeric ID for plugin host automation.
    ///
    /// Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Human-readable stable ID (e.g., `"freq_1"`).
    ///
    /// Default: `""` (unassigned).
    pub string_id: &'static str,

    /// Normalization curve for mapping between plain and normalized values.
    pub scale: ParamScale,

    /// Capability flags for plugin host communication.
    pub flags: ParamFlags,

    /// Parameter group for host tree display (e.g., `"Band 1"`).
    ///
    /// Empty string means top-level (ungrouped).
    pub group: &'static str,
}

impl ParamDescriptor {
    /// Frequency parameter in Hz with a 1 Hz grid.
    ///
    /// Scale defaults to linear; pair with [`with_scale`](Self::with_scale)
    /// and [`ParamScale::skew`] for perceptual spacing.
    pub const fn frequency_hz(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// Gain parameter with custom name and range (decibels), 0.5 dB grid.
    pub const fn gain_db(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Decibels,
            min,
            max,
            default,
            step: 0.5,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// Dimensionless quality (Q) parameter, 0.05 grid.
    pub const fn quality(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.05,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feather_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::quality("Q 1", "Q 1", 0.1, 10.0, 1.0)
    ///     .with_id(ParamId(102), "q_1");
    /// assert_eq!(desc.id, ParamId(102));
    /// assert_eq!(desc.string_id, "q_1");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the normalization scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the legal value interval.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets the parameter group.
    pub const fn with_group(mut self, group: &'static str) -> Self {
        self.group = group;
        self
    }

    /// Clamps a value to this parameter's valid range.
    ///
    /// NaN maps to the default value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feather_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);
    /// assert_eq!(desc.clamp(0.0), 0.0);
    /// assert_eq!(desc.clamp(-100.0), -24.0);
    /// assert_eq!(desc.clamp(100.0), 24.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Clamps a value and rounds it to the nearest legal step.
    ///
    /// The grid is anchored at `min`: `min + step * round((v - min) / step)`.
    /// Values within a thousandth of a step of the grid are returned as-is.
    #[inline]
    pub fn snap(&self, value: f32) -> f32 {
        let clamped = self.clamp(value);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = (clamped - self.min) / self.step;
        let nearest = libm::roundf(steps);
        // Already on the grid: keep the exact value.
        if (steps - nearest).abs() < 1e-3 {
            return clamped;
        }
        self.clamp(self.min + nearest * self.step)
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    ///
    /// # Example
    ///
    /// ```rust
    /// use feather_core::{ParamDescriptor, ParamScale};
    ///
    /// let desc = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);
    /// assert_eq!(desc.normalize(0.0), 0.5);
    ///
    /// let freq = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 20000.0, 1000.0)
    ///     .with_scale(ParamScale::skew(0.25));
    /// assert_eq!(freq.normalize(20.0), 0.0);
    /// assert_eq!(freq.normalize(20000.0), 1.0);
    /// ```
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let linear = ((self.clamp(value) - self.min) / range).clamp(0.0, 1.0);
        match self.scale {
            ParamScale::Linear => linear,
            ParamScale::Power(exp) => libm::powf(linear, 1.0 / exp),
        }
    }

    /// Converts a normalized value (0.0 to 1.0) to the parameter range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let n = normalized.clamp(0.0, 1.0);
        let curved = match self.scale {
            ParamScale::Linear => n,
            ParamScale::Power(exp) => libm::powf(n, exp),
        };
        self.min + curved * (self.max - self.min)
    }

    /// Formats a value with this parameter's unit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feather_core::ParamDescriptor;
    ///
    /// let freq = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 20000.0, 250.0);
    /// assert_eq!(freq.format_value(250.0), "250 Hz");
    ///
    /// let q = ParamDescriptor::quality("Q", "Q", 0.1, 10.0, 1.0);
    /// assert_eq!(q.format_value(1.5), "1.50");
    /// ```
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Hertz => format!("{:.0} Hz", value),
            ParamUnit::Decibels => format!("{:+.1} dB", value),
            ParamUnit::None => format!("{:.2}", value),
        }
    }

    /// Parses display text back to a clamped value.
    ///
    /// Accepts a bare number or a number followed by this parameter's unit
    /// suffix (case-insensitive). Frequencies also accept a `kHz` suffix.
    /// Returns `None` if the text is not a number.
    pub fn parse_value(&self, text: &str) -> Option<f32> {
        let trimmed = text.trim();
        let (number, multiplier) = match self.unit {
            ParamUnit::Hertz => {
                if let Some(n) = strip_suffix_ignore_case(trimmed, "khz") {
                    (n, 1000.0)
                } else {
                    (strip_suffix_ignore_case(trimmed, "hz").unwrap_or(trimmed), 1.0)
                }
            }
            ParamUnit::Decibels => (strip_suffix_ignore_case(trimmed, "db").unwrap_or(trimmed), 1.0),
            ParamUnit::None => (trimmed, 1.0),
        };
        let value: f32 = number.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(self.clamp(value * multiplier))
    }
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels (dB) - for gain parameters.
    Decibels,

    /// Hertz (Hz) - for center frequencies.
    Hertz,

    /// No unit - for dimensionless parameters such as Q.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use feather_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Decibels.suffix(), " dB");
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Hertz => " Hz",
            ParamUnit::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEffect {
        gain: f32,
        q: f32,
    }

    impl TestEffect {
        fn new() -> Self {
            Self { gain: 0.0, q: 1.0 }
        }
    }

    impl ParameterInfo for TestEffect {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0)
                        .with_id(ParamId(100), "test_gain"),
                ),
                1 => Some(
                    ParamDescriptor::quality("Quality", "Q", 0.1, 10.0, 1.0)
                        .with_id(ParamId(101), "test_q"),
                ),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.gain,
                1 => self.q,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            let Some(desc) = self.param_info(index) else {
                return;
            };
            match index {
                0 => self.gain = desc.clamp(value),
                1 => self.q = desc.clamp(value),
                _ => {}
            }
        }
    }

    #[test]
    fn test_param_info() {
        let effect = TestEffect::new();
        assert_eq!(effect.param_count(), 2);

        let gain = effect.param_info(0).expect("should have gain param");
        assert_eq!(gain.name, "Gain");
        assert_eq!(gain.unit, ParamUnit::Decibels);
        assert_eq!(gain.min, -24.0);
        assert_eq!(gain.max, 24.0);

        assert!(effect.param_info(2).is_none());
    }

    #[test]
    fn test_param_clamping() {
        let mut effect = TestEffect::new();

        effect.set_param(0, 100.0);
        assert_eq!(effect.get_param(0), 24.0);

        effect.set_param(1, 0.0);
        assert_eq!(effect.get_param(1), 0.1);

        // Out of bounds set does nothing
        effect.set_param(99, 42.0);
        assert_eq!(effect.get_param(99), 0.0);
    }

    #[test]
    fn test_find_param_by_name() {
        let effect = TestEffect::new();
        assert_eq!(effect.find_param_by_name("gain"), Some(0));
        assert_eq!(effect.find_param_by_name("Q"), Some(1));
        assert_eq!(effect.find_param_by_name("test_q"), Some(1));
        assert_eq!(effect.find_param_by_name("drive"), None);
    }

    #[test]
    fn test_param_id_lookup() {
        let effect = TestEffect::new();

        assert_eq!(effect.param_id(0), Some(ParamId(100)));
        assert_eq!(effect.param_id(2), None);
        assert_eq!(effect.param_index_by_id(ParamId(101)), Some(1));
        assert_eq!(effect.param_index_by_id(ParamId(999)), None);
    }

    #[test]
    fn test_clamp_nan_uses_default() {
        let desc = ParamDescriptor::quality("Q", "Q", 0.1, 10.0, 1.0);
        assert_eq!(desc.clamp(f32::NAN), 1.0);
    }

    #[test]
    fn test_snap_to_step_grid() {
        let gain = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);
        assert_eq!(gain.snap(0.2), 0.0);
        assert_eq!(gain.snap(0.3), 0.5);
        assert_eq!(gain.snap(-11.8), -12.0);
        assert_eq!(gain.snap(99.0), 24.0);

        let freq = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 20000.0, 250.0);
        assert_eq!(freq.snap(999.6), 1000.0);

        let q = ParamDescriptor::quality("Q", "Q", 0.1, 10.0, 1.0);
        assert!((q.snap(1.02) - 1.0).abs() < 1e-5);
        assert!((q.snap(1.04) - 1.05).abs() < 1e-5);

        let continuous = gain.with_step(0.0);
        assert_eq!(continuous.snap(0.3), 0.3);
    }

    #[test]
    fn test_normalize_denormalize_linear() {
        let desc = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);

        assert_eq!(desc.normalize(-24.0), 0.0);
        assert_eq!(desc.normalize(0.0), 0.5);
        assert_eq!(desc.normalize(24.0), 1.0);

        assert_eq!(desc.denormalize(0.0), -24.0);
        assert_eq!(desc.denormalize(0.5), 0.0);
        assert_eq!(desc.denormalize(1.0), 24.0);
    }

    #[test]
    fn test_normalize_denormalize_skewed() {
        let desc = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 20000.0, 1000.0)
            .with_scale(ParamScale::skew(0.25));

        assert_eq!(desc.scale, ParamScale::Power(4.0));

        // value = 20 + 19980 * 0.5^4
        let mid = desc.denormalize(0.5);
        assert!((mid - 1268.75).abs() < 0.01, "skewed midpoint was {mid}");

        for &val in &[20.0, 100.0, 1000.0, 5000.0, 20000.0] {
            let rt = desc.denormalize(desc.normalize(val));
            assert!(
                (rt - val).abs() / val < 1e-4,
                "skewed round-trip failed for {val}: got {rt}"
            );
        }
    }

    #[test]
    fn test_skew_one_is_linear() {
        assert_eq!(ParamScale::skew(1.0), ParamScale::Linear);
    }

    #[test]
    fn test_normalize_zero_range() {
        let desc = ParamDescriptor::gain_db("Fixed", "Fixed", 42.0, 42.0, 42.0);
        assert_eq!(desc.normalize(42.0), 0.0);
    }

    #[test]
    fn test_format_value() {
        let freq = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 20000.0, 250.0);
        assert_eq!(freq.format_value(1000.0), "1000 Hz");

        let gain = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);
        assert_eq!(gain.format_value(12.0), "+12.0 dB");
        assert_eq!(gain.format_value(-3.5), "-3.5 dB");

        let q = ParamDescriptor::quality("Q", "Q", 0.1, 10.0, 1.0);
        assert_eq!(q.format_value(0.7), "0.70");
    }

    #[test]
    fn test_parse_value() {
        let freq = ParamDescriptor::frequency_hz("Freq", "Freq", 20.0, 20000.0, 250.0);
        assert_eq!(freq.parse_value("1000"), Some(1000.0));
        assert_eq!(freq.parse_value("1000 Hz"), Some(1000.0));
        assert_eq!(freq.parse_value("2.5 kHz"), Some(2500.0));
        assert_eq!(freq.parse_value("99999"), Some(20000.0));
        assert_eq!(freq.parse_value("loud"), None);

        let gain = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);
        assert_eq!(gain.parse_value("+12.0 dB"), Some(12.0));
        assert_eq!(gain.parse_value("-6dB"), Some(-6.0));
        assert_eq!(gain.parse_value("inf"), None);

        let q = ParamDescriptor::quality("Q", "Q", 0.1, 10.0, 1.0);
        assert_eq!(q.parse_value(" 2.00 "), Some(2.0));
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let gain = ParamDescriptor::gain_db("Gain", "Gain", -24.0, 24.0, 0.0);
        let text = gain.format_value(-7.5);
        assert_eq!(gain.parse_value(&text), Some(-7.5));
    }

    #[test]
    fn test_param_flags() {
        assert!(ParamFlags::AUTOMATABLE.contains(ParamFlags::AUTOMATABLE));
        assert_eq!(ParamFlags::default(), ParamFlags::AUTOMATABLE);
    }

    #[test]
    fn test_builders() {
        let desc = ParamDescriptor::gain_db("Gain 2", "Gain 2", -24.0, 24.0, 0.0)
            .with_id(ParamId(104), "gain_2")
            .with_group("Band 2");

        assert_eq!(desc.id, ParamId(104));
        assert_eq!(desc.string_id, "gain_2");
        assert_eq!(desc.group, "Band 2");
        assert!(desc.flags.contains(ParamFlags::AUTOMATABLE));
        assert_eq!(desc.name, "Gain 2");
    }

    #[test]
    fn test_param_unit_suffix() {
        assert_eq!(ParamUnit::Decibels.suffix(), " dB");
        assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
        assert_eq!(ParamUnit::None.suffix(), "");
    }
}
