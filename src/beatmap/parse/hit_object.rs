//! Decoder of `[HitObjects]` records.
//!
//! A record is `x,y,time,type,hitSound,extras`. For a hold, the first `:`-separated component of
//! `extras` is its end time.

use crate::beatmap::{
    lex::token::Section,
    model::hit_object::{HitObject, HitObjectKind, HitSound},
};

use super::{ParseError, Result, field::Fields};

const SECTION: Section = Section::HitObjects;

/// Bit of the type field marking a note.
pub const NOTE: u32 = 1 << 0;
/// Bit of the type field marking a new combo.
pub const NEW_COMBO: u32 = 1 << 2;
/// Bits of the type field read as the count of skipped combo colours.
pub const COMBO_COLOR_SKIP: u32 = 0b1_1100;
/// Bit of the type field marking a hold.
pub const HOLD: u32 = 1 << 7;

/// Bits of the hitsound field which have a meaning.
const HIT_SOUND_BITS: u32 = 0b1111;

/// Decodes the kind from the type bitmask. The note bit takes precedence over the hold bit.
///
/// # Errors
///
/// Returns [`ParseError::UnknownHitObjectType`] if neither bit is set.
pub const fn decode_kind(type_bits: u32) -> Result<HitObjectKind> {
    if type_bits & NOTE != 0 {
        Ok(HitObjectKind::Note)
    } else if type_bits & HOLD != 0 {
        Ok(HitObjectKind::Hold)
    } else {
        Err(ParseError::UnknownHitObjectType(type_bits))
    }
}

/// Returns whether the type bitmask starts a new combo.
#[must_use]
pub const fn is_new_combo(type_bits: u32) -> bool {
    type_bits & NEW_COMBO != 0
}

/// Reads the count of skipped combo colours as `(type & 0b11100) / 4`.
///
/// The masked bits include the new combo bit, so the result ranges over `0..=7`.
#[must_use]
pub const fn combo_colors_skipped(type_bits: u32) -> u8 {
    ((type_bits & COMBO_COLOR_SKIP) / 4) as u8
}

/// Decodes the hitsound bitmask, defaulting to [`HitSound::NORMAL`] when no bit is set.
#[must_use]
pub fn decode_hit_sound(bits: u32) -> HitSound {
    let hit_sound = HitSound::from_bits_truncate((bits & HIT_SOUND_BITS) as u8);
    if hit_sound.is_empty() {
        HitSound::NORMAL
    } else {
        hit_sound
    }
}

impl HitObject {
    /// Decodes a comma-separated `[HitObjects]` record.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownHitObjectType`] for a type which is neither a note nor a hold,
    /// and [`ParseError::MissingField`] or [`ParseError::MalformedRecord`] for a broken field.
    pub fn from_record(record: &str) -> Result<Self> {
        let fields = Fields::split(SECTION, record, ',');
        let x = fields.int(0, "x")?;
        let y = fields.int(1, "y")?;
        let time = fields.int(2, "time")?;
        let type_bits = fields.int(3, "type")?;
        let kind = decode_kind(type_bits)?;
        let hit_sound = decode_hit_sound(fields.int(4, "hitSound")?);
        let end_time = match kind {
            HitObjectKind::Note => time,
            HitObjectKind::Hold => {
                let extras = fields.required(5, "endTime")?;
                Fields::split(SECTION, extras, ':').int(0, "endTime")?
            }
        };
        Ok(Self {
            kind,
            hit_sound,
            new_combo: is_new_combo(type_bits),
            combo_colors_skipped: combo_colors_skipped(type_bits),
            x,
            y,
            time,
            end_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn note() {
        assert_eq!(
            HitObject::from_record("64,192,1500,1,0,0:0:0:0:").unwrap(),
            HitObject {
                kind: HitObjectKind::Note,
                hit_sound: HitSound::NORMAL,
                new_combo: false,
                combo_colors_skipped: 0,
                x: 64,
                y: 192,
                time: 1500,
                end_time: 1500,
            }
        );
    }

    #[test]
    fn hold() {
        let hold = HitObject::from_record("448,192,100,128,2,500:0:0:0:0:").unwrap();
        assert_eq!(hold.kind, HitObjectKind::Hold);
        assert_eq!(hold.end_time, 500);
        assert_eq!(hold.duration(), 400);
        assert_eq!(hold.hit_sound, HitSound::WHISTLE);
    }

    #[test]
    fn note_bit_takes_precedence() {
        let object = HitObject::from_record("64,192,100,129,0,500:0:0:0:0:").unwrap();
        assert_eq!(object.kind, HitObjectKind::Note);
        assert_eq!(object.end_time, 100);
    }

    #[test]
    fn note_without_extras() {
        let note = HitObject::from_record("320,192,42,1,8").unwrap();
        assert_eq!(note.end_time, 42);
        assert_eq!(note.hit_sound, HitSound::CLAP);
    }

    #[test]
    fn hit_sounds() {
        assert_eq!(decode_hit_sound(0), HitSound::NORMAL);
        assert_eq!(decode_hit_sound(5), HitSound::NORMAL | HitSound::FINISH);
        assert_eq!(decode_hit_sound(0b1110), HitSound::WHISTLE | HitSound::FINISH | HitSound::CLAP);
        assert_eq!(decode_hit_sound(0b1_0000), HitSound::NORMAL);
    }

    #[test]
    fn new_combo_reads_bit_two() {
        assert!(!is_new_combo(1));
        assert!(is_new_combo(5));
        assert!(is_new_combo(128 | 4));
    }

    #[test]
    fn combo_colors_skipped_is_literal_arithmetic() {
        // The masked field includes the new combo bit, so a plain new combo counts as one skip.
        assert_eq!(combo_colors_skipped(1), 0);
        assert_eq!(combo_colors_skipped(1 | 4), 1);
        assert_eq!(combo_colors_skipped(1 | 16), 4);
        assert_eq!(combo_colors_skipped(1 | 4 | 8 | 16), 7);
        assert_eq!(combo_colors_skipped(1 | 32 | 64), 0);
    }

    #[test]
    fn unknown_type() {
        assert_eq!(
            HitObject::from_record("64,192,100,2,0,0:0:0:0:"),
            Err(ParseError::UnknownHitObjectType(2))
        );
        assert_eq!(decode_kind(0b1000), Err(ParseError::UnknownHitObjectType(8)));
    }

    #[test]
    fn broken_fields() {
        assert_eq!(
            HitObject::from_record("64,192,100,128,0"),
            Err(ParseError::MissingField {
                section: Section::HitObjects,
                field: "endTime",
            })
        );
        assert_eq!(
            HitObject::from_record("64,192,100,128,0,later:0:0:0:0:"),
            Err(ParseError::MalformedRecord {
                section: Section::HitObjects,
                field: "endTime",
                value: "later".into(),
            })
        );
        assert_eq!(
            HitObject::from_record("64,192,soon,1,0,0:0:0:0:"),
            Err(ParseError::MalformedRecord {
                section: Section::HitObjects,
                field: "time",
                value: "soon".into(),
            })
        );
    }
}
