//! Hit objects, the playable notes and holds.

use bitflags::bitflags;

/// The width of the playfield in osu! pixels, which is divided into the lanes.
pub const PLAYFIELD_WIDTH: i32 = 512;

/// Kind of a hit object in osu!mania.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// A single tap.
    Note,
    /// A hold note, pressed at `time` and released at `end_time`.
    Hold,
}

bitflags! {
    /// Hitsounds played when the object is hit. Never empty once decoded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HitSound: u8 {
        /// Bit 0.
        const NORMAL = 1 << 0;
        /// Bit 1.
        const WHISTLE = 1 << 1;
        /// Bit 2.
        const FINISH = 1 << 2;
        /// Bit 3.
        const CLAP = 1 << 3;
    }
}

impl Default for HitSound {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A playable element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Whether it is a note or a hold.
    pub kind: HitObjectKind,
    /// The hitsound flags.
    pub hit_sound: HitSound,
    /// Whether the object starts a new combo.
    pub new_combo: bool,
    /// How many combo colours are skipped.
    pub combo_colors_skipped: u8,
    /// Horizontal position in osu! pixels, which determines the lane.
    pub x: i32,
    /// Vertical position in osu! pixels. Unused by osu!mania.
    pub y: i32,
    /// Time when the object is to be hit, in milliseconds from the beginning of the audio.
    pub time: i32,
    /// End time of the object. Equals `time` for a note.
    pub end_time: i32,
}

impl HitObject {
    /// Returns whether the object is a hold.
    #[must_use]
    pub const fn is_hold(&self) -> bool {
        matches!(self.kind, HitObjectKind::Hold)
    }

    /// Duration in milliseconds, `0` for a note.
    #[must_use]
    pub const fn duration(&self) -> i32 {
        self.end_time.saturating_sub(self.time)
    }

    /// Computes the zero-based lane from `x` for the given key count.
    ///
    /// Returns `None` if `key_count` is zero.
    #[must_use]
    pub fn lane(&self, key_count: u32) -> Option<u32> {
        if key_count == 0 {
            return None;
        }
        let scaled = i64::from(self.x) * i64::from(key_count) / i64::from(PLAYFIELD_WIDTH);
        let max_lane = i64::from(key_count) - 1;
        u32::try_from(scaled.clamp(0, max_lane)).ok()
    }
}
