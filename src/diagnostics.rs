//! Fancy diagnostics support using `ariadne`.
//!
//! Since [`ParseErrorWithRange`] carries the byte range of the offending line, this module lets
//! ariadne handle row/column calculations for display purposes.
//!
//! # Usage Example
//!
//! ```rust
//! use mania_rs::{beatmap::parse_beatmap, diagnostics::emit_parse_error};
//!
//! let source = "[General]\nMode: 0\n";
//! if let Err(error) = parse_beatmap(source) {
//!     emit_parse_error("test.osu", source, &error);
//! }
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::beatmap::parse::ParseErrorWithRange;

/// Simple source container that holds the filename and source text.
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

impl ToAriadne for ParseErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let filename = src.name().to_string();
        Report::build(ReportKind::Error, (filename.clone(), self.range()))
            .with_message(format!("parse: {}", self.content()))
            .with_label(
                Label::new((filename, self.range()))
                    .with_message("while parsing this line")
                    .with_color(Color::Red),
            )
            .finish()
    }
}

/// Convenience method: renders a parse error against its source into stderr.
pub fn emit_parse_error(name: &str, source: &str, error: &ParseErrorWithRange) {
    let simple = SimpleSource::new(name, source);
    let report = error.to_report(&simple);
    let _ = report.eprint((name.to_string(), Source::from(source)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beatmap::parse_beatmap;

    #[test]
    fn report_is_written() {
        let source = "[General]\nMode: 1\n";
        let error = parse_beatmap(source).unwrap_err();
        let report = error.to_report(&SimpleSource::new("mode.osu", source));

        let mut rendered = Vec::new();
        report
            .write(("mode.osu".to_string(), Source::from(source)), &mut rendered)
            .unwrap();
        let rendered = String::from_utf8_lossy(&rendered);
        assert!(rendered.contains("unsupported game mode"));
    }
}
