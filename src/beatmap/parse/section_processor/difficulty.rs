//! This module handles the lines of `[Difficulty]`:
//!
//! - `HPDrainRate` - HP drain rate, float.
//! - `CircleSize` - Key count in osu!mania, integer.
//! - `OverallDifficulty` - Overall difficulty, float.

use log::trace;

use super::{SectionProcessor, assign, key_value};
use crate::beatmap::{
    lex::token::Section,
    model::Beatmap,
    parse::{
        Result,
        field::{parse_float, parse_int},
        prompt::{KeyDuplication, Prompter},
    },
};

/// It processes `[Difficulty]` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DifficultyProcessor;

impl SectionProcessor for DifficultyProcessor {
    const SECTION: Section = Section::Difficulty;

    fn on_line<P: Prompter>(&self, line: &str, beatmap: &mut Beatmap, prompter: &P) -> Result<()> {
        let Some((key, value)) = key_value(line) else {
            return Ok(());
        };
        let duplication = KeyDuplication {
            section: Self::SECTION,
            key,
            newer: value,
        };
        let difficulty = &mut beatmap.difficulty;
        match key {
            "HPDrainRate" => assign(
                &mut difficulty.hp_drain_rate,
                parse_float(Self::SECTION, "HPDrainRate", value)?,
                duplication,
                prompter,
            ),
            "CircleSize" => assign(
                &mut difficulty.key_count,
                parse_int(Self::SECTION, "CircleSize", value)?,
                duplication,
                prompter,
            ),
            "OverallDifficulty" => assign(
                &mut difficulty.overall_difficulty,
                parse_float(Self::SECTION, "OverallDifficulty", value)?,
                duplication,
                prompter,
            ),
            _ => {
                trace!("ignored key `{key}` in {}", Self::SECTION);
                Ok(())
            }
        }
    }
}
