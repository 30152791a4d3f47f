//! Timing points, which describe the rhythm grid and scroll speed from their time onward.

/// Default sample set for hit objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// `0`, uses the sample set of the beatmap.
    #[default]
    BeatmapDefault,
    /// `1`
    Normal,
    /// `2`
    Soft,
    /// `3`
    Drum,
}

impl TryFrom<u8> for SampleSet {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::BeatmapDefault,
            1 => Self::Normal,
            2 => Self::Soft,
            3 => Self::Drum,
            other => return Err(other),
        })
    }
}

/// A timing section starting at [`TimingPoint::time`], applicable until the next timing point.
///
/// An uninherited point defines its own tempo (`bpm`), while an inherited one keeps the tempo of
/// the preceding uninherited point and only overrides the scroll `velocity` and sounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// Start time of the timing section, in milliseconds from the beginning of the audio.
    pub time: i32,
    /// The raw beat length field. Positive: duration of a beat in milliseconds. Non-positive: a
    /// negative inverse slider velocity multiplier as a percentage.
    pub beat_length: f64,
    /// The tempo, present only when `beat_length` is positive.
    pub bpm: Option<u32>,
    /// Scroll velocity multiplier, `1.0` unless `beat_length` is non-positive.
    pub velocity: f64,
    /// Amount of beats in a measure. Inherited timing points ignore this.
    pub meter: u32,
    /// Default sample set for hit objects.
    pub sample_set: SampleSet,
    /// Custom sample index for hit objects. `0` indicates the default hitsounds.
    pub sample_index: u32,
    /// Volume percentage for hit objects.
    pub volume: u32,
    /// Whether the timing point is uninherited.
    pub uninherited: bool,
    /// Whether kiai time is enabled.
    pub kiai_time: bool,
    /// Whether the first barline is omitted.
    pub omit_first_bar_line: bool,
}

impl TimingPoint {
    /// Returns whether this point inherits the tempo of the preceding uninherited point.
    #[must_use]
    pub const fn is_inherited(&self) -> bool {
        !self.uninherited
    }
}
