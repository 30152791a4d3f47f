//! The parsed beatmap and its accumulating aggregates.

pub mod hit_object;
pub mod timing;

use self::{
    hit_object::{HitObject, HitObjectKind},
    timing::TimingPoint,
};

/// Fields of the `[General]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// Preview time offset in milliseconds after the audio start.
    pub preview_time: Option<i32>,
}

/// Fields of the `[Metadata]` section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Romanized song title.
    pub title: Option<String>,
    /// Romanized artist name.
    pub artist: Option<String>,
    /// Beatmap creator name.
    pub creator: Option<String>,
    /// Difficulty name.
    pub version: Option<String>,
    /// Original media the song was produced for.
    pub source: Option<String>,
    /// Search terms, in file order.
    pub tags: Option<Vec<String>>,
    /// Difficulty ID.
    pub beatmap_id: Option<i32>,
    /// Beatmap set ID.
    pub beatmap_set_id: Option<i32>,
}

impl Metadata {
    /// Returns the tags, empty if not specified.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// Fields of the `[Difficulty]` section.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// HP drain rate.
    pub hp_drain_rate: Option<f64>,
    /// Number of keys, which is written as `CircleSize` in osu!mania.
    pub key_count: Option<u32>,
    /// Overall difficulty.
    pub overall_difficulty: Option<f64>,
}

/// A parsed osu!mania beatmap.
///
/// The aggregates (BPM range, note counts and key positions) are maintained while records are
/// pushed, instead of being recomputed from the sequences.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// The version from `osu file format vN`, if declared.
    pub format_version: Option<u32>,
    /// `[General]` fields.
    pub general: General,
    /// `[Metadata]` fields.
    pub metadata: Metadata,
    /// `[Difficulty]` fields.
    pub difficulty: Difficulty,
    timing_points: Vec<TimingPoint>,
    hit_objects: Vec<HitObject>,
    min_bpm: u32,
    max_bpm: u32,
    note_count: usize,
    hold_count: usize,
    key_positions: Vec<i32>,
}

impl Beatmap {
    /// Timing points in file order, which is chronological.
    #[must_use]
    pub fn timing_points(&self) -> &[TimingPoint] {
        &self.timing_points
    }

    /// Hit objects in file order.
    #[must_use]
    pub fn hit_objects(&self) -> &[HitObject] {
        &self.hit_objects
    }

    /// The slowest BPM, or `0` if no uninherited timing point is present.
    #[must_use]
    pub const fn min_bpm(&self) -> u32 {
        self.min_bpm
    }

    /// The fastest BPM, or `0` if no uninherited timing point is present.
    #[must_use]
    pub const fn max_bpm(&self) -> u32 {
        self.max_bpm
    }

    /// Number of notes.
    #[must_use]
    pub const fn note_count(&self) -> usize {
        self.note_count
    }

    /// Number of holds.
    #[must_use]
    pub const fn hold_count(&self) -> usize {
        self.hold_count
    }

    /// Distinct x positions of the hit objects in ascending order, one per used key.
    #[must_use]
    pub fn key_positions(&self) -> &[i32] {
        &self.key_positions
    }

    /// Appends a timing point and folds its BPM into the range.
    ///
    /// A bound which is still `0` is seeded by the next BPM, so a BPM that rounds to `0` cannot be
    /// told apart from "no tempo yet".
    pub(crate) fn push_timing_point(&mut self, timing_point: TimingPoint) {
        if let Some(bpm) = timing_point.bpm {
            if self.min_bpm == 0 || bpm < self.min_bpm {
                self.min_bpm = bpm;
            }
            if self.max_bpm == 0 || bpm > self.max_bpm {
                self.max_bpm = bpm;
            }
        }
        self.timing_points.push(timing_point);
    }

    /// Appends a hit object, counting it and recording its key position.
    pub(crate) fn push_hit_object(&mut self, hit_object: HitObject) {
        match hit_object.kind {
            HitObjectKind::Note => self.note_count += 1,
            HitObjectKind::Hold => self.hold_count += 1,
        }
        if !self.key_positions.contains(&hit_object.x) {
            self.key_positions.push(hit_object.x);
        }
        self.hit_objects.push(hit_object);
    }

    /// Finalizes the aggregates after the last record.
    pub(crate) fn finish(&mut self) {
        self.key_positions.sort_unstable();
    }

    /// Finds the timing point in effect at `time`.
    ///
    /// It is the last point whose time is at or before `time`, or the first point if `time` precedes
    /// all of them. Returns `None` only if there are no timing points.
    #[must_use]
    pub fn timing_point_at(&self, time: i32) -> Option<&TimingPoint> {
        self.timing_points
            .iter()
            .rev()
            .find(|point| point.time <= time)
            .or_else(|| self.timing_points.first())
    }

    /// Finds the tempo in effect at `time`, from the last point defining a tempo at or before it.
    ///
    /// A point defines a tempo when its beat length is positive, regardless of its uninherited
    /// flag. Falls back to the first such point, like [`Self::timing_point_at`].
    #[must_use]
    pub fn bpm_at(&self, time: i32) -> Option<u32> {
        let mut tempo_points = self.timing_points.iter().filter(|point| point.bpm.is_some());
        let first = tempo_points.clone().next();
        tempo_points
            .rfind(|point| point.time <= time)
            .or(first)
            .and_then(|point| point.bpm)
    }

    /// The scroll velocity multiplier in effect at `time`, `1.0` without timing points.
    #[must_use]
    pub fn velocity_at(&self, time: i32) -> f64 {
        self.timing_point_at(time)
            .map_or(1.0, |point| point.velocity)
    }
}
