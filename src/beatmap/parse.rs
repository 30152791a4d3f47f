//! Parsing [`Beatmap`] from [`TokenStream`](super::lex::TokenStream).
//!
//! Raw [String] == [lex](super::lex) ==> [`TokenStream`](super::lex::TokenStream) == [parse] ==> [`Beatmap`]
//!
//! The scan is a single pass: a section header switches the current section, and every other line
//! is handed to the [`SectionProcessor`] of that section. Lines under sections which are not
//! interpreted, such as `[Events]`, are skipped.

pub(crate) mod field;
pub mod hit_object;
pub mod prompt;
pub mod section_processor;
pub mod timing_point;

use log::{debug, trace};
use thiserror::Error;

use crate::beatmap::{
    lex::token::{Section, Token, TokenWithRange},
    mixin::{SourceRangeMixin, SourceRangeMixinExt},
    model::Beatmap,
};

use self::{
    prompt::Prompter,
    section_processor::{
        DifficultyProcessor, GeneralProcessor, HitObjectsProcessor, MetadataProcessor,
        SectionProcessor, TimingPointsProcessor,
    },
};

/// An error occurred when parsing the [`TokenStream`](super::lex::TokenStream). Every error aborts
/// the whole parse.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParseError {
    /// The `Mode` of `[General]` is not osu!mania (`3`).
    #[error("unsupported game mode `{0}`, only osu!mania (3) is supported")]
    UnsupportedMode(String),
    /// The type bitmask of a hit object is neither a note nor a hold.
    #[error("unknown hit object type: {0:#010b}")]
    UnknownHitObjectType(u32),
    /// A field of a record could not be decoded.
    #[error("malformed field `{field}` in {section}: `{value}`")]
    MalformedRecord {
        /// The section of the record.
        section: Section,
        /// Name of the field.
        field: &'static str,
        /// The raw value.
        value: String,
    },
    /// A required field of a record is absent.
    #[error("missing field `{field}` in {section}")]
    MissingField {
        /// The section of the record.
        section: Section,
        /// Name of the field.
        field: &'static str,
    },
    /// The [`Prompter`] chose to halt on a duplicated key.
    #[error("parsing is halted")]
    Halted,
}

/// Type alias of `core::result::Result<T, ParseError>`
pub(crate) type Result<T> = core::result::Result<T, ParseError>;

/// A parse error with the byte range of the offending line.
pub type ParseErrorWithRange = SourceRangeMixin<ParseError>;

impl Beatmap {
    /// Parses a token stream into [`Beatmap`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] with the range of its line. No partial beatmap is returned.
    pub fn from_token_stream<'a, P: Prompter>(
        token_iter: impl IntoIterator<Item = &'a TokenWithRange<'a>>,
        prompter: &P,
    ) -> core::result::Result<Self, ParseErrorWithRange> {
        let mut beatmap = Self::default();
        let mut seen_section = false;
        let mut current: Option<Section> = None;
        for token in token_iter {
            match *token.content() {
                Token::FormatVersion(version) if !seen_section => {
                    beatmap.format_version = Some(version);
                }
                Token::FormatVersion(version) => {
                    debug!("ignored format version v{version} after the first section");
                }
                Token::Section(name) => {
                    seen_section = true;
                    current = Section::from_name(name);
                    match current {
                        Some(section) => trace!("entered section {section}"),
                        None => debug!("skipping section [{name}]"),
                    }
                }
                Token::Line(line) => {
                    let Some(section) = current else {
                        continue;
                    };
                    dispatch(section, line, &mut beatmap, prompter)
                        .map_err(|err| err.into_wrapper(token))?;
                }
            }
        }
        beatmap.finish();
        Ok(beatmap)
    }
}

/// Applies a data line to the processor registered for `section`.
fn dispatch<P: Prompter>(
    section: Section,
    line: &str,
    beatmap: &mut Beatmap,
    prompter: &P,
) -> Result<()> {
    match section {
        Section::General => GeneralProcessor.on_line(line, beatmap, prompter),
        Section::Metadata => MetadataProcessor.on_line(line, beatmap, prompter),
        Section::Difficulty => DifficultyProcessor.on_line(line, beatmap, prompter),
        Section::TimingPoints => TimingPointsProcessor.on_line(line, beatmap, prompter),
        Section::HitObjects => HitObjectsProcessor.on_line(line, beatmap, prompter),
    }
}
