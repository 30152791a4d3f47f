//! Definitions of the token in the `.osu` format.

use std::fmt;

use crate::beatmap::mixin::SourceRangeMixin;

/// The prefix of the first line of every `.osu` file, followed by the version number.
const FORMAT_VERSION_PREFIX: &str = "osu file format v";

/// A line classified by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub enum Token<'a> {
    /// `osu file format v[u32]`. The format version declaration placed at the top of the file.
    FormatVersion(u32),
    /// `[name]`. Starts a section; `name` consists of ASCII alphanumerics only.
    Section(&'a str),
    /// Any other non-empty and non-comment line, interpreted by the current section.
    Line(&'a str),
}

/// A token with position information.
pub type TokenWithRange<'a> = SourceRangeMixin<Token<'a>>;

impl<'a> Token<'a> {
    /// Classifies a line which is already known to be neither blank nor a comment.
    #[must_use]
    pub fn classify(line: &'a str) -> Self {
        if let Some(name) = section_name(line) {
            return Self::Section(name);
        }
        if let Some(version) = line
            .strip_prefix(FORMAT_VERSION_PREFIX)
            .and_then(|version| version.trim_end().parse().ok())
        {
            return Self::FormatVersion(version);
        }
        Self::Line(line)
    }
}

/// Extracts the name of a section header such as `[HitObjects]`.
fn section_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    (!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())).then_some(name)
}

/// A section of the `.osu` format which the parser interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`, `Key: Value` pairs.
    General,
    /// `[Metadata]`, `Key:Value` pairs.
    Metadata,
    /// `[Difficulty]`, `Key:Value` pairs.
    Difficulty,
    /// `[TimingPoints]`, one timing point record per line.
    TimingPoints,
    /// `[HitObjects]`, one hit object record per line.
    HitObjects,
}

impl Section {
    /// Looks up the section by its header name. Other sections such as `[Events]` yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "General" => Self::General,
            "Metadata" => Self::Metadata,
            "Difficulty" => Self::Difficulty,
            "TimingPoints" => Self::TimingPoints,
            "HitObjects" => Self::HitObjects,
            _ => return None,
        })
    }

    /// The header name of the section.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Metadata => "Metadata",
            Self::Difficulty => "Difficulty",
            Self::TimingPoints => "TimingPoints",
            Self::HitObjects => "HitObjects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name())
    }
}
