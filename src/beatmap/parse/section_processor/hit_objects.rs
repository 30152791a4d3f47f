use super::SectionProcessor;
use crate::beatmap::{
    lex::token::Section,
    model::{Beatmap, hit_object::HitObject},
    parse::{Result, prompt::Prompter},
};

/// It processes `[HitObjects]` records, counting notes and holds and collecting key positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitObjectsProcessor;

impl SectionProcessor for HitObjectsProcessor {
    const SECTION: Section = Section::HitObjects;

    fn on_line<P: Prompter>(&self, line: &str, beatmap: &mut Beatmap, _: &P) -> Result<()> {
        beatmap.push_hit_object(HitObject::from_record(line)?);
        Ok(())
    }
}
