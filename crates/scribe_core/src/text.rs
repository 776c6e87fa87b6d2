//! Source location types.
//!
//! Tokens and errors carry a [`SourceLocation`]; the scanner derives it from a
//! character offset through a [`LineMap`] built once per input.

use std::fmt;

/// A position in source text, measured in characters from the start.
pub type CharPos = usize;

/// A 1-based line and column in source text.
///
/// Columns count characters (not bytes), so a location is stable regardless of
/// how the text is encoded.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl SourceLocation {
    /// The location of the first character of any input.
    pub const START: SourceLocation = SourceLocation { line: 1, column: 1 };

    #[inline]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The location `count` characters further along the same line.
    #[inline]
    pub fn advance(self, count: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + count as u32,
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

/// Whether `ch` terminates a line.
#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// A map from character offsets to line numbers, built from source text.
///
/// `\r\n` counts as a single terminator; lone `\r`, `\n`, U+2028 and U+2029
/// each end a line.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Character offsets of the start of each line.
    line_starts: Vec<CharPos>,
}

impl LineMap {
    /// Build a line map from the characters of a source text.
    pub fn new(chars: &[char]) -> Self {
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            if ch == '\r' && chars.get(i + 1) == Some(&'\n') {
                i += 1;
            }
            if is_line_terminator(ch) {
                line_starts.push(i + 1);
            }
            i += 1;
        }
        Self { line_starts }
    }

    /// Build a line map directly from a string.
    pub fn from_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self::new(&chars)
    }

    /// Get the 0-based line index for a character offset.
    pub fn line_of(&self, pos: CharPos) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    /// Get the 1-based location for a character offset.
    pub fn location_of(&self, pos: CharPos) -> SourceLocation {
        let line = self.line_of(pos);
        let line_start = self.line_starts[line];
        SourceLocation {
            line: line as u32 + 1,
            column: (pos - line_start) as u32 + 1,
        }
    }

    /// Get the total number of lines.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
