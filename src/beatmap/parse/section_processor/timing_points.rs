use super::SectionProcessor;
use crate::beatmap::{
    lex::token::Section,
    model::{Beatmap, timing::TimingPoint},
    parse::{Result, prompt::Prompter},
};

/// It processes `[TimingPoints]` records, folding their BPM into the beatmap's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimingPointsProcessor;

impl SectionProcessor for TimingPointsProcessor {
    const SECTION: Section = Section::TimingPoints;

    fn on_line<P: Prompter>(&self, line: &str, beatmap: &mut Beatmap, _: &P) -> Result<()> {
        beatmap.push_timing_point(TimingPoint::from_record(line)?);
        Ok(())
    }
}
