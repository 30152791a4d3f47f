//! This module handles the lines of `[General]`:
//!
//! - `Mode: n` - Game mode. Anything other than `3` (osu!mania) is rejected.
//! - `PreviewTime: ms` - Preview time offset of the audio.
//!
//! Other keys such as `AudioFilename` are ignored.

use log::trace;

use super::{SectionProcessor, assign, key_value};
use crate::beatmap::{
    lex::token::Section,
    model::Beatmap,
    parse::{
        ParseError, Result, field::parse_int,
        prompt::{KeyDuplication, Prompter},
    },
};

/// The value of `Mode` for osu!mania.
const MANIA_MODE: &str = "3";

/// It processes `[General]` lines such as `Mode` and `PreviewTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GeneralProcessor;

impl SectionProcessor for GeneralProcessor {
    const SECTION: Section = Section::General;

    fn on_line<P: Prompter>(&self, line: &str, beatmap: &mut Beatmap, prompter: &P) -> Result<()> {
        let Some((key, value)) = key_value(line) else {
            return Ok(());
        };
        match key {
            "Mode" if value != MANIA_MODE => {
                return Err(ParseError::UnsupportedMode(value.to_owned()));
            }
            "PreviewTime" => assign(
                &mut beatmap.general.preview_time,
                parse_int(Self::SECTION, "PreviewTime", value)?,
                KeyDuplication {
                    section: Self::SECTION,
                    key,
                    newer: value,
                },
                prompter,
            )?,
            _ => trace!("ignored key `{key}` in {}", Self::SECTION),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beatmap::parse::prompt::AlwaysUseNewer;

    #[test]
    fn mode_guard() {
        let mut beatmap = Beatmap::default();
        assert_eq!(
            GeneralProcessor.on_line("Mode: 3", &mut beatmap, &AlwaysUseNewer),
            Ok(())
        );
        assert_eq!(
            GeneralProcessor.on_line("Mode: 1", &mut beatmap, &AlwaysUseNewer),
            Err(ParseError::UnsupportedMode("1".into()))
        );
        assert_eq!(
            GeneralProcessor.on_line("Mode:0", &mut beatmap, &AlwaysUseNewer),
            Err(ParseError::UnsupportedMode("0".into()))
        );
    }

    #[test]
    fn preview_time() {
        let mut beatmap = Beatmap::default();
        GeneralProcessor
            .on_line("PreviewTime: 41520", &mut beatmap, &AlwaysUseNewer)
            .unwrap();
        GeneralProcessor
            .on_line("AudioFilename: audio.mp3", &mut beatmap, &AlwaysUseNewer)
            .unwrap();
        assert_eq!(beatmap.general.preview_time, Some(41520));

        assert_eq!(
            GeneralProcessor.on_line("PreviewTime: soon", &mut beatmap, &AlwaysUseNewer),
            Err(ParseError::MalformedRecord {
                section: Section::General,
                field: "PreviewTime",
                value: "soon".into(),
            })
        );
    }
}
