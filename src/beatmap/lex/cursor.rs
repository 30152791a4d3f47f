//! Line-oriented cursor over the beatmap source text.

/// The byte order mark which some editors put at the start of `.osu` files.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// A cursor walking the source text line by line.
pub struct Cursor<'a> {
    /// The line position, starts with 1.
    line: usize,
    /// The index position.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, skipping a leading byte order mark.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let index = if source.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len_utf8()
        } else {
            0
        };
        Self {
            line: 1,
            index,
            source,
        }
    }

    /// Returns whether all lines have been consumed.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Determine the end of the current line and handle CRLF (\r\n) correctly.
    ///
    /// Returns a tuple `(remaining_end, line_end_index)` where:
    /// - `remaining_end` is the byte offset from current `index` to the first `\n` if any,
    ///   otherwise the remaining source length from `index` to the end.
    /// - `line_end_index` is the absolute byte index where the line content ends (exclusive),
    ///   excluding a trailing `\r`.
    fn current_line_bounds(&self) -> (usize, usize) {
        let rest = &self.source[self.index..];
        let remaining_end = rest.find('\n').unwrap_or(rest.len());
        let line_end_index = if rest[..remaining_end].ends_with('\r') {
            self.index + remaining_end - 1
        } else {
            self.index + remaining_end
        };
        (remaining_end, line_end_index)
    }

    /// Moves the cursor through the next line, returning its content (without the line terminator) and its byte range.
    pub fn next_line_with_range(&mut self) -> Option<(std::ops::Range<usize>, &'a str)> {
        if self.is_end() {
            return None;
        }
        let (remaining_end, line_end_index) = self.current_line_bounds();
        let start = self.index;
        let line = &self.source[start..line_end_index];
        // Step over the line feed too, if any.
        self.index = (start + remaining_end + 1).min(self.source.len());
        self.line += 1;
        Some((start..line_end_index, line))
    }

    /// Moves the cursor through the next line, returning its content.
    pub fn next_line(&mut self) -> Option<&'a str> {
        self.next_line_with_range().map(|(_, line)| line)
    }

    /// Returns the line number of the line which will be returned next, starts with 1.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the current byte index in the source string.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}
