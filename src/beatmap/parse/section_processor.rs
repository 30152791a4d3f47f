//! Processors of data lines, one per interpreted section.
//!
//! - [`GeneralProcessor`] - `[General]`, enforces the game mode.
//! - [`MetadataProcessor`] - `[Metadata]`.
//! - [`DifficultyProcessor`] - `[Difficulty]`.
//! - [`TimingPointsProcessor`] - `[TimingPoints]`.
//! - [`HitObjectsProcessor`] - `[HitObjects]`.

mod difficulty;
mod general;
mod hit_objects;
mod metadata;
mod timing_points;

use log::debug;

pub use self::{
    difficulty::DifficultyProcessor, general::GeneralProcessor, hit_objects::HitObjectsProcessor,
    metadata::MetadataProcessor, timing_points::TimingPointsProcessor,
};
use super::{
    Result,
    prompt::{KeyDuplication, Prompter},
};
use crate::beatmap::{lex::token::Section, model::Beatmap};

/// A processor of lines in a section. An implementation applies one line to the beatmap at once,
/// without seeing the other lines.
pub trait SectionProcessor {
    /// The section which this processor takes lines of.
    const SECTION: Section;

    /// Processes a data line of [`Self::SECTION`].
    ///
    /// # Errors
    ///
    /// Returns an error which must abort the whole parse.
    fn on_line<P: Prompter>(&self, line: &str, beatmap: &mut Beatmap, prompter: &P) -> Result<()>;
}

/// Splits a `Key:Value` line at the first colon, trimming both sides.
pub(crate) fn key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
}

/// Stores `newer` into an unset field, or asks `prompter` if the key was already seen.
pub(crate) fn assign<T, P: Prompter>(
    target: &mut Option<T>,
    newer: T,
    duplication: KeyDuplication<'_>,
    prompter: &P,
) -> Result<()> {
    match target {
        Some(older) => {
            debug!(
                "duplicated key `{}` in {}: `{}`",
                duplication.key, duplication.section, duplication.newer
            );
            prompter.handle_duplication(duplication).apply(older, newer)
        }
        None => {
            *target = Some(newer);
            Ok(())
        }
    }
}
