//! Prompting interface and utilities.
//!
//! An object implementing [`Prompter`] is required by [`Beatmap::from_token_stream`](crate::beatmap::model::Beatmap::from_token_stream).
//! It decides what to do when a key of `[General]`, `[Metadata]` or `[Difficulty]` appears twice.

use crate::beatmap::lex::token::Section;

use super::{ParseError, Result};

/// An interface to prompt about handling conflicts on the beatmap file.
pub trait Prompter {
    /// Determines a [`DuplicationWorkaround`] for a duplicated key.
    fn handle_duplication(&self, duplication: KeyDuplication<'_>) -> DuplicationWorkaround;
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn handle_duplication(&self, duplication: KeyDuplication<'_>) -> DuplicationWorkaround {
        (**self).handle_duplication(duplication)
    }
}

/// It represents that a key appeared again in its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyDuplication<'a> {
    /// The section containing the key.
    pub section: Section,
    /// The duplicated key.
    pub key: &'a str,
    /// The raw incoming value.
    pub newer: &'a str,
}

/// A choice to handle the duplicated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DuplicationWorkaround {
    /// Choose to use the existing one.
    UseOlder,
    /// Choose to use the incoming one.
    UseNewer,
    /// Choose to interrupt this parsing.
    Halt,
}

impl DuplicationWorkaround {
    pub(crate) fn apply<T>(self, target: &mut T, newer: T) -> Result<()> {
        match self {
            Self::UseOlder => Ok(()),
            Self::UseNewer => {
                *target = newer;
                Ok(())
            }
            Self::Halt => Err(ParseError::Halted),
        }
    }
}

/// The strategy that always using older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlwaysUseOlder;

impl Prompter for AlwaysUseOlder {
    fn handle_duplication(&self, _: KeyDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseOlder
    }
}

/// The strategy that always using newer ones, so the last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlwaysUseNewer;

impl Prompter for AlwaysUseNewer {
    fn handle_duplication(&self, _: KeyDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseNewer
    }
}

/// The strategy that always halts parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AlwaysHalt;

impl Prompter for AlwaysHalt {
    fn handle_duplication(&self, _: KeyDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::Halt
    }
}
