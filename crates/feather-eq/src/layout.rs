//! Parameter layout: the twelve host-visible parameters.
//!
//! Index order is band-major: `Freq 1, Gain 1, Q 1, Freq 2, ... Q 4`.
//! Stable IDs are `100 + index` and never change once published.

use feather_core::{ParamDescriptor, ParamId, ParamScale};

/// Number of peaking bands per channel.
pub const BAND_COUNT: usize = 4;

/// Parameters per band (frequency, gain, Q).
pub const PARAMS_PER_BAND: usize = 3;

/// Total number of host-visible parameters.
pub const PARAM_COUNT: usize = BAND_COUNT * PARAMS_PER_BAND;

/// Lowest center frequency in Hz.
pub const FREQ_MIN: f32 = 20.0;
/// Highest center frequency in Hz.
pub const FREQ_MAX: f32 = 20000.0;
/// Gain limit in dB (symmetric).
pub const GAIN_LIMIT_DB: f32 = 24.0;
/// Lowest quality factor.
pub const Q_MIN: f32 = 0.1;
/// Highest quality factor.
pub const Q_MAX: f32 = 10.0;

/// Default center frequencies, one per band.
pub const DEFAULT_FREQS: [f32; BAND_COUNT] = [250.0, 500.0, 750.0, 1000.0];
/// Default gain for every band.
pub const DEFAULT_GAIN_DB: f32 = 0.0;
/// Default Q for every band.
pub const DEFAULT_Q: f32 = 1.0;

/// Skew 0.25 (`Power(1 / 0.25)`).
const FREQ_SCALE: ParamScale = ParamScale::Power(4.0);

/// Which of a band's three controls a parameter addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandParam {
    /// Center frequency in Hz.
    Freq,
    /// Gain in dB.
    Gain,
    /// Quality factor.
    Q,
}

impl BandParam {
    /// All controls in layout order.
    pub const ALL: [BandParam; PARAMS_PER_BAND] = [BandParam::Freq, BandParam::Gain, BandParam::Q];

    /// Offset of this control within a band's parameter triple.
    pub const fn offset(self) -> usize {
        match self {
            BandParam::Freq => 0,
            BandParam::Gain => 1,
            BandParam::Q => 2,
        }
    }

    /// Lowercase key used in configuration files and CLI overrides.
    pub const fn key(self) -> &'static str {
        match self {
            BandParam::Freq => "freq",
            BandParam::Gain => "gain",
            BandParam::Q => "q",
        }
    }

    /// Parses a key (`freq`, `gain` or `q`, case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// Index of a band control in the flat parameter layout.
///
/// `band` is zero-based.
pub const fn param_index(band: usize, param: BandParam) -> usize {
    band * PARAMS_PER_BAND + param.offset()
}

/// Splits a flat parameter index into `(band, control)`.
pub const fn split_index(index: usize) -> Option<(usize, BandParam)> {
    if index >= PARAM_COUNT {
        return None;
    }
    let param = match index % PARAMS_PER_BAND {
        0 => BandParam::Freq,
        1 => BandParam::Gain,
        _ => BandParam::Q,
    };
    Some((index / PARAMS_PER_BAND, param))
}

const fn freq(
    name: &'static str,
    id: u32,
    string_id: &'static str,
    group: &'static str,
    default: f32,
) -> ParamDescriptor {
    ParamDescriptor::frequency_hz(name, name, FREQ_MIN, FREQ_MAX, default)
        .with_scale(FREQ_SCALE)
        .with_id(ParamId(id), string_id)
        .with_group(group)
}

const fn gain(
    name: &'static str,
    id: u32,
    string_id: &'static str,
    group: &'static str,
) -> ParamDescriptor {
    ParamDescriptor::gain_db(name, name, -GAIN_LIMIT_DB, GAIN_LIMIT_DB, DEFAULT_GAIN_DB)
        .with_id(ParamId(id), string_id)
        .with_group(group)
}

const fn quality(
    name: &'static str,
    id: u32,
    string_id: &'static str,
    group: &'static str,
) -> ParamDescriptor {
    ParamDescriptor::quality(name, name, Q_MIN, Q_MAX, DEFAULT_Q)
        .with_id(ParamId(id), string_id)
        .with_group(group)
}

/// Descriptor table in layout order.
pub const PARAMS: [ParamDescriptor; PARAM_COUNT] = [
    freq("Freq 1", 100, "freq_1", "Band 1", DEFAULT_FREQS[0]),
    gain("Gain 1", 101, "gain_1", "Band 1"),
    quality("Q 1", 102, "q_1", "Band 1"),
    freq("Freq 2", 103, "freq_2", "Band 2", DEFAULT_FREQS[1]),
    gain("Gain 2", 104, "gain_2", "Band 2"),
    quality("Q 2", 105, "q_2", "Band 2"),
    freq("Freq 3", 106, "freq_3", "Band 3", DEFAULT_FREQS[2]),
    gain("Gain 3", 107, "gain_3", "Band 3"),
    quality("Q 3", 108, "q_3", "Band 3"),
    freq("Freq 4", 109, "freq_4", "Band 4", DEFAULT_FREQS[3]),
    gain("Gain 4", 110, "gain_4", "Band 4"),
    quality("Q 4", 111, "q_4", "Band 4"),
];

/// Descriptor for the parameter at `index`.
pub fn descriptor(index: usize) -> Option<&'static ParamDescriptor> {
    PARAMS.get(index)
}

/// Descriptor for one band control.
pub fn band_descriptor(band: usize, param: BandParam) -> Option<&'static ParamDescriptor> {
    if band >= BAND_COUNT {
        return None;
    }
    PARAMS.get(param_index(band, param))
}

/// Finds a parameter index by its stable ID.
pub fn index_by_id(id: ParamId) -> Option<usize> {
    PARAMS.iter().position(|d| d.id == id)
}

/// Finds a parameter index by display name, short name or string ID
/// (case-insensitive).
pub fn index_by_name(name: &str) -> Option<usize> {
    let name = name.trim();
    PARAMS.iter().position(|d| {
        d.name.eq_ignore_ascii_case(name)
            || d.short_name.eq_ignore_ascii_case(name)
            || d.string_id.eq_ignore_ascii_case(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use feather_core::ParamUnit;

    #[test]
    fn layout_order_and_names() {
        let names: Vec<&str> = PARAMS.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            [
                "Freq 1", "Gain 1", "Q 1", "Freq 2", "Gain 2", "Q 2", "Freq 3", "Gain 3", "Q 3",
                "Freq 4", "Gain 4", "Q 4",
            ]
        );
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        for (i, desc) in PARAMS.iter().enumerate() {
            assert_eq!(desc.id, ParamId(100 + i as u32));
            assert_eq!(index_by_id(desc.id), Some(i));
        }
        assert_eq!(index_by_id(ParamId(99)), None);
        assert_eq!(index_by_id(ParamId(112)), None);
    }

    #[test]
    fn ranges_steps_and_defaults() {
        for band in 0..BAND_COUNT {
            let f = band_descriptor(band, BandParam::Freq).unwrap();
            assert_eq!((f.min, f.max, f.step), (20.0, 20000.0, 1.0));
            assert_eq!(f.default, DEFAULT_FREQS[band]);
            assert_eq!(f.scale, ParamScale::skew(0.25));
            assert_eq!(f.unit, ParamUnit::Hertz);

            let g = band_descriptor(band, BandParam::Gain).unwrap();
            assert_eq!((g.min, g.max, g.step, g.default), (-24.0, 24.0, 0.5, 0.0));
            assert_eq!(g.scale, ParamScale::Linear);

            let q = band_descriptor(band, BandParam::Q).unwrap();
            assert_eq!((q.min, q.max, q.step, q.default), (0.1, 10.0, 0.05, 1.0));
            assert_eq!(q.scale, ParamScale::Linear);
        }
        assert!(band_descriptor(BAND_COUNT, BandParam::Freq).is_none());
    }

    #[test]
    fn index_split_roundtrip() {
        for band in 0..BAND_COUNT {
            for param in BandParam::ALL {
                let idx = param_index(band, param);
                assert_eq!(split_index(idx), Some((band, param)));
            }
        }
        assert_eq!(split_index(PARAM_COUNT), None);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(index_by_name("Gain 3"), Some(7));
        assert_eq!(index_by_name("freq_4"), Some(9));
        assert_eq!(index_by_name("q 2"), Some(5));
        assert_eq!(index_by_name("Drive"), None);
    }

    #[test]
    fn band_param_keys() {
        assert_eq!(BandParam::from_key("FREQ"), Some(BandParam::Freq));
        assert_eq!(BandParam::from_key(" gain "), Some(BandParam::Gain));
        assert_eq!(BandParam::from_key("q"), Some(BandParam::Q));
        assert_eq!(BandParam::from_key("width"), None);
    }
}
