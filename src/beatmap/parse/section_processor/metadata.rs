//! This module handles the lines of `[Metadata]`:
//!
//! - `Title`, `Artist`, `Creator`, `Version`, `Source` - Texts, kept as they are.
//! - `Tags` - Search terms separated by whitespaces.
//! - `BeatmapID`, `BeatmapSetID` - Online IDs.
//!
//! Other keys such as `TitleUnicode` are ignored.

use itertools::Itertools;
use log::trace;

use super::{SectionProcessor, assign, key_value};
use crate::beatmap::{
    lex::token::Section,
    model::Beatmap,
    parse::{
        Result,
        field::parse_int,
        prompt::{KeyDuplication, Prompter},
    },
};

/// It processes `[Metadata]` lines such as `Title`, `Tags` and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MetadataProcessor;

impl SectionProcessor for MetadataProcessor {
    const SECTION: Section = Section::Metadata;

    fn on_line<P: Prompter>(&self, line: &str, beatmap: &mut Beatmap, prompter: &P) -> Result<()> {
        let Some((key, value)) = key_value(line) else {
            return Ok(());
        };
        let duplication = KeyDuplication {
            section: Self::SECTION,
            key,
            newer: value,
        };
        let metadata = &mut beatmap.metadata;
        let text_field = match key {
            "Title" => &mut metadata.title,
            "Artist" => &mut metadata.artist,
            "Creator" => &mut metadata.creator,
            "Version" => &mut metadata.version,
            "Source" => &mut metadata.source,
            "Tags" => {
                let tags = value.split_whitespace().map(str::to_owned).collect_vec();
                return assign(&mut metadata.tags, tags, duplication, prompter);
            }
            "BeatmapID" => {
                let id = parse_int(Self::SECTION, "BeatmapID", value)?;
                return assign(&mut metadata.beatmap_id, id, duplication, prompter);
            }
            "BeatmapSetID" => {
                let id = parse_int(Self::SECTION, "BeatmapSetID", value)?;
                return assign(&mut metadata.beatmap_set_id, id, duplication, prompter);
            }
            _ => {
                trace!("ignored key `{key}` in {}", Self::SECTION);
                return Ok(());
            }
        };
        assign(text_field, value.to_owned(), duplication, prompter)
    }
}
