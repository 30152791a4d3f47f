//! The parser module of osu!mania beatmap (.osu) files.
//!
//! This module consists of two phases: lexical analyzing and line parsing.
//!
//! `lex` module splits the source into lines and classifies them as a format version, a section
//! header or a data line.
//!
//! `parse` module interprets the data lines of `[General]`, `[Metadata]`, `[Difficulty]`,
//! `[TimingPoints]` and `[HitObjects]` into a [`Beatmap`], in a single pass.
//!
//! In detail, our policies are:
//!
//! - Support only UTF-8 (as required `&str` to input).
//! - Support only osu!mania. A beatmap for another game mode is rejected.
//! - Do not support writing beatmaps back into the format.
//! - Ignore unknown sections and keys silently, but fail on a broken record.

pub mod lex;
pub mod mixin;
pub mod model;
pub mod parse;
pub mod prelude;

use self::{
    lex::TokenStream,
    model::Beatmap,
    parse::{
        ParseErrorWithRange,
        prompt::{AlwaysUseNewer, Prompter},
    },
};

/// Configuration of parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseConfig<P> {
    prompter: P,
}

impl<P: Prompter> ParseConfig<P> {
    /// Replaces the prompter handling duplicated keys.
    #[must_use]
    pub fn prompter<P2: Prompter>(self, prompter: P2) -> ParseConfig<P2> {
        ParseConfig { prompter }
    }
}

/// The default configuration, whose duplicated keys are resolved by the last one.
#[must_use]
pub const fn default_config() -> ParseConfig<AlwaysUseNewer> {
    ParseConfig {
        prompter: AlwaysUseNewer,
    }
}

/// Parses an osu!mania beatmap from source text with [`default_config`].
///
/// # Example
///
/// ```
/// use mania_rs::beatmap::parse_beatmap;
///
/// let source = "osu file format v14\n\n[General]\nMode: 3\n\n[Metadata]\nTitle:Test\n\n[TimingPoints]\n0,500,4,2,0,100,1,0\n\n[HitObjects]\n64,192,0,1,0,0:0:0:0:\n";
/// let beatmap = parse_beatmap(source).unwrap();
/// assert_eq!(beatmap.metadata.title.as_deref(), Some("Test"));
/// assert_eq!(beatmap.max_bpm(), 120);
/// assert_eq!(beatmap.note_count(), 1);
/// ```
///
/// # Errors
///
/// Returns the first fatal error with the range of its line.
pub fn parse_beatmap(source: &str) -> Result<Beatmap, ParseErrorWithRange> {
    parse_beatmap_with_config(source, default_config())
}

/// Parses an osu!mania beatmap from source text with the configuration.
///
/// # Errors
///
/// Returns the first fatal error with the range of its line.
pub fn parse_beatmap_with_config<P: Prompter>(
    source: &str,
    config: ParseConfig<P>,
) -> Result<Beatmap, ParseErrorWithRange> {
    let tokens = TokenStream::parse_lex(source);
    Beatmap::from_token_stream(&tokens, &config.prompter)
}
