//! Prelude module for the beatmap parser.
//!
//! You can use `use mania_rs::beatmap::prelude::*;` to import all beatmap types at once.

#[cfg(feature = "diagnostics")]
pub use crate::diagnostics::{SimpleSource, ToAriadne, emit_parse_error};

pub use super::{
    ParseConfig, default_config,
    lex::{
        TokenStream,
        cursor::Cursor,
        token::{Section, Token, TokenWithRange},
    },
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::{
        Beatmap, Difficulty, General, Metadata,
        hit_object::{HitObject, HitObjectKind, HitSound, PLAYFIELD_WIDTH},
        timing::{SampleSet, TimingPoint},
    },
    parse::{
        ParseError, ParseErrorWithRange,
        prompt::{
            AlwaysHalt, AlwaysUseNewer, AlwaysUseOlder, DuplicationWorkaround, KeyDuplication,
            Prompter,
        },
        section_processor::{
            DifficultyProcessor, GeneralProcessor, HitObjectsProcessor, MetadataProcessor,
            SectionProcessor, TimingPointsProcessor,
        },
    },
    parse_beatmap, parse_beatmap_with_config,
};
