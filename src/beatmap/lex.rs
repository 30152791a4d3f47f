//! Lexical analyzer of the `.osu` format.
//!
//! Raw [String] == [`TokenStream::parse_lex`] ==> [`TokenStream`] == [parse](super::parse) ==> [`Beatmap`](super::model::Beatmap)
//!
//! The lexer never fails. It drops blank lines and `//` comments, then classifies the rest into
//! [`Token`]s carrying the byte range of their line.

pub mod cursor;
pub mod token;

use crate::beatmap::mixin::SourceRangeMixinExt;

use self::{
    cursor::Cursor,
    token::{Token, TokenWithRange},
};

/// The prefix of comment lines.
const COMMENT_PREFIX: &str = "//";

/// A sequence of tokens in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenStream<'a> {
    /// The tokens.
    pub tokens: Vec<TokenWithRange<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Analyzes and converts the `.osu` format text into [`TokenStream`].
    ///
    /// Both LF and CRLF line terminators are accepted.
    #[must_use]
    pub fn parse_lex(source: &'a str) -> Self {
        let mut cursor = Cursor::new(source);
        let mut tokens = vec![];
        while let Some((range, line)) = cursor.next_line_with_range() {
            if line.trim().is_empty() || line.trim_start().starts_with(COMMENT_PREFIX) {
                continue;
            }
            tokens.push(Token::classify(line).into_wrapper_range(range));
        }
        Self { tokens }
    }

    /// Returns an iterator over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, TokenWithRange<'a>> {
        self.tokens.iter()
    }
}

impl<'b, 'a> IntoIterator for &'b TokenStream<'a> {
    type Item = &'b TokenWithRange<'a>;
    type IntoIter = std::slice::Iter<'b, TokenWithRange<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
