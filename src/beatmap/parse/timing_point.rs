//! Decoder of `[TimingPoints]` records.
//!
//! A record is `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`. Only
//! `time` and `beatLength` are required, because files of older format versions omit the rest.

use crate::beatmap::{
    lex::token::Section,
    model::timing::{SampleSet, TimingPoint},
};

use super::{Result, field::Fields};

const SECTION: Section = Section::TimingPoints;

/// Bit of the effects field enabling kiai time.
pub const KIAI_TIME: u32 = 1 << 0;
/// Bit of the effects field omitting the first barline.
pub const OMIT_FIRST_BAR_LINE: u32 = 1 << 2;

const DEFAULT_METER: u32 = 4;
const DEFAULT_VOLUME: u32 = 100;

/// Derives `(bpm, velocity)` from a beat length.
///
/// A positive beat length is the duration of a beat in milliseconds, so it defines a tempo and
/// keeps the velocity at `1.0`. Otherwise it is `-100 / velocity` and no tempo is defined.
#[must_use]
pub fn tempo_from_beat_length(beat_length: f64) -> (Option<u32>, f64) {
    if beat_length > 0.0 {
        (Some((60_000.0 / beat_length).round() as u32), 1.0)
    } else {
        (None, (100.0 / beat_length).abs())
    }
}

/// Returns whether the effects bitmask enables kiai time.
#[must_use]
pub const fn is_kiai_time(effects: u32) -> bool {
    effects & KIAI_TIME != 0
}

/// Returns whether the effects bitmask omits the first barline.
#[must_use]
pub const fn omits_first_bar_line(effects: u32) -> bool {
    effects & OMIT_FIRST_BAR_LINE != 0
}

impl TimingPoint {
    /// Decodes a comma-separated `[TimingPoints]` record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingField`](super::ParseError::MissingField) if `time` or
    /// `beatLength` is absent, and [`ParseError::MalformedRecord`](super::ParseError::MalformedRecord)
    /// if a present field is not a number, `beatLength` is zero or the sample set is unknown.
    pub fn from_record(record: &str) -> Result<Self> {
        let fields = Fields::split(SECTION, record, ',');
        let time = fields.int(0, "time")?;
        let beat_length = fields.float(1, "beatLength")?;
        if beat_length == 0.0 {
            return Err(fields.malformed(1, "beatLength"));
        }
        let (bpm, velocity) = tempo_from_beat_length(beat_length);
        let meter = fields.int_or(2, "meter", DEFAULT_METER)?;
        let sample_set = SampleSet::try_from(fields.int_or(3, "sampleSet", 0_u8)?)
            .map_err(|_| fields.malformed(3, "sampleSet"))?;
        let sample_index = fields.int_or(4, "sampleIndex", 0)?;
        let volume = fields.int_or(5, "volume", DEFAULT_VOLUME)?;
        let uninherited = fields
            .get(6)
            .map_or(beat_length > 0.0, |raw| raw.trim() == "1");
        let effects: u32 = fields.int_or(7, "effects", 0)?;
        Ok(Self {
            time,
            beat_length,
            bpm,
            velocity,
            meter,
            sample_set,
            sample_index,
            volume,
            uninherited,
            kiai_time: is_kiai_time(effects),
            omit_first_bar_line: omits_first_bar_line(effects),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::beatmap::parse::ParseError;

    #[test]
    fn uninherited_point() {
        assert_eq!(
            TimingPoint::from_record("1000,500,4,2,1,60,1,0").unwrap(),
            TimingPoint {
                time: 1000,
                beat_length: 500.0,
                bpm: Some(120),
                velocity: 1.0,
                meter: 4,
                sample_set: SampleSet::Soft,
                sample_index: 1,
                volume: 60,
                uninherited: true,
                kiai_time: false,
                omit_first_bar_line: false,
            }
        );
    }

    #[test]
    fn inherited_point() {
        let point = TimingPoint::from_record("2000,-50,4,1,0,100,0,1").unwrap();
        assert_eq!(point.bpm, None);
        assert_eq!(point.velocity, 2.0);
        assert!(point.is_inherited());
        assert!(point.kiai_time);
    }

    #[test]
    fn bpm_is_rounded() {
        assert_eq!(tempo_from_beat_length(333.333_333_333_333_3), (Some(180), 1.0));
        assert_eq!(tempo_from_beat_length(461.538_461_538_461_5), (Some(130), 1.0));
        // 60000 / 479.8 = 125.05...
        assert_eq!(tempo_from_beat_length(479.8), (Some(125), 1.0));
        assert_eq!(tempo_from_beat_length(-100.0), (None, 1.0));
        assert_eq!(tempo_from_beat_length(-200.0), (None, 0.5));
    }

    #[test]
    fn effects_bits() {
        assert!(is_kiai_time(0b1));
        assert!(!is_kiai_time(0b100));
        assert!(omits_first_bar_line(0b100));
        assert!(!omits_first_bar_line(0b1000));
        assert!(is_kiai_time(0b101) && omits_first_bar_line(0b101));
        assert!(!is_kiai_time(0b1010) && !omits_first_bar_line(0b1010));
    }

    #[test]
    fn uninherited_flag_must_be_literal_one() {
        let point = TimingPoint::from_record("0,500,4,0,0,100,2,0").unwrap();
        assert!(!point.uninherited);
        assert_eq!(point.bpm, Some(120));
    }

    #[test]
    fn legacy_record_uses_defaults() {
        let point = TimingPoint::from_record("-30,300").unwrap();
        assert_eq!(point.time, -30);
        assert_eq!(point.bpm, Some(200));
        assert_eq!(point.meter, 4);
        assert_eq!(point.sample_set, SampleSet::BeatmapDefault);
        assert_eq!(point.volume, 100);
        assert!(point.uninherited);
        assert!(!point.kiai_time);
    }

    #[test]
    fn decimal_time_is_truncated() {
        assert_eq!(
            TimingPoint::from_record("1234.7,500,4,0,0,100,1,0")
                .unwrap()
                .time,
            1234
        );
    }

    #[test]
    fn malformed_records() {
        assert_eq!(
            TimingPoint::from_record("0"),
            Err(ParseError::MissingField {
                section: Section::TimingPoints,
                field: "beatLength",
            })
        );
        assert_eq!(
            TimingPoint::from_record("0,abc,4,0,0,100,1,0"),
            Err(ParseError::MalformedRecord {
                section: Section::TimingPoints,
                field: "beatLength",
                value: "abc".into(),
            })
        );
        assert_eq!(
            TimingPoint::from_record("0,500,4,7,0,100,1,0"),
            Err(ParseError::MalformedRecord {
                section: Section::TimingPoints,
                field: "sampleSet",
                value: "7".into(),
            })
        );
    }

    #[test]
    fn zero_beat_length_is_rejected() {
        for record in ["100,0,4,0,0,100,0,0", "100,-0.0", "100, 0.000 ,4"] {
            assert_eq!(
                TimingPoint::from_record(record).map(|point| point.velocity),
                Err(ParseError::MalformedRecord {
                    section: Section::TimingPoints,
                    field: "beatLength",
                    value: record.split(',').nth(1).unwrap().into(),
                })
            );
        }
    }
}
