//! Indentation-tracking text writer.

use crate::options::EmitOptions;

/// Accumulates emitted text, writing the indentation prefix lazily at the
/// start of each non-empty line.
pub struct IndentedWriter<'o> {
    output: String,
    level: usize,
    at_line_start: bool,
    newline: &'o str,
    indentation_prefix: &'o str,
}

impl<'o> IndentedWriter<'o> {
    pub fn new(options: &'o EmitOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            level: 0,
            at_line_start: true,
            newline: &options.newline,
            indentation_prefix: &options.indentation_prefix,
        }
    }

    /// Write `text`, separating it from the previous text by a space when the
    /// two would otherwise scan as a different token (`+ +x`, `- -x`, `< <T>x`).
    pub fn write(&mut self, text: &str) {
        let Some(first) = text.chars().next() else {
            return;
        };
        if self.at_line_start {
            for _ in 0..self.level {
                self.output.push_str(self.indentation_prefix);
            }
            self.at_line_start = false;
        } else if let Some(last) = self.output.chars().next_back() {
            if would_fuse(last, first) {
                self.output.push(' ');
            }
        }
        self.output.push_str(text);
    }

    pub fn write_space(&mut self) {
        self.write(" ");
    }

    /// End the current line.
    pub fn write_line(&mut self) {
        self.output.push_str(self.newline);
        self.at_line_start = true;
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Length of the text written so far, in bytes.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn into_string(self) -> String {
        self.output
    }
}

fn would_fuse(last: char, first: char) -> bool {
    matches!((last, first), ('+', '+') | ('-', '-') | ('/', '/') | ('/', '*') | ('<', '<'))
}
