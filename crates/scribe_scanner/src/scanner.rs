//! The TypeScript scanner.
//!
//! Converts source text into the complete token sequence the parser consumes.
//! Scanning is eager: the first lexical failure aborts and is returned as a
//! located [`SyntaxError`].

use crate::char_codes::*;
use crate::token::{Token, TokenValue};
use scribe_ast::syntax_kind::SyntaxKind;
use scribe_ast::{Identifier, NumericLiteralKind};
use scribe_core::text::LineMap;
use scribe_diagnostics::{messages, DiagnosticMessage, Result, SyntaxError};

/// Scan `text` into tokens. The returned sequence always ends with a single
/// [`SyntaxKind::EndOfFileToken`].
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(text);
    scanner.skip_shebang();
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tracing::debug!(chars = scanner.text_len(), tokens = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// The scanner converts TypeScript source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// Whether a line break was skipped before the current token.
    preceding_line_break: bool,
    line_map: LineMap,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let line_map = LineMap::new(&text);
        Self {
            text,
            pos: 0,
            token_start: 0,
            preceding_line_break: false,
            line_map,
        }
    }

    /// Skip a shebang line at the very beginning of the file (e.g., `#!/usr/bin/env node`).
    /// Call this before the first `scan()` call.
    pub fn skip_shebang(&mut self) {
        if self.pos == 0 && self.text.len() >= 2 && self.text[0] == '#' && self.text[1] == '!' {
            self.pos = 2;
            while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                self.pos += 1;
            }
        }
    }

    /// Get the full source text length.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    // ========================================================================
    // Character access
    // ========================================================================

    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    fn error_at(&self, pos: usize, message: &DiagnosticMessage, args: &[&str]) -> SyntaxError {
        SyntaxError::new(message, args, self.line_map.location_of(pos))
    }

    fn make_token(&self, kind: SyntaxKind) -> Token {
        Token::new(kind, self.slice(self.token_start, self.pos), self.line_map.location_of(self.token_start))
            .with_line_break(self.preceding_line_break)
    }

    /// Skip whitespace and comments, noting whether a line break was crossed.
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            let Some(ch) = self.current_char() else {
                return Ok(());
            };
            match ch {
                '\r' => {
                    self.preceding_line_break = true;
                    self.pos += 1;
                    if self.current_char() == Some('\n') {
                        self.pos += 1;
                    }
                }
                c if is_line_break(c) => {
                    self.preceding_line_break = true;
                    self.pos += 1;
                }
                c if is_white_space_single_line(c) => {
                    self.pos += 1;
                }
                '/' if self.char_at(1) == Some('/') => {
                    self.pos += 2;
                    while !self.is_eof() && !is_line_break(self.text[self.pos]) {
                        self.pos += 1;
                    }
                }
                '/' if self.char_at(1) == Some('*') => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        match self.current_char() {
                            None => return Err(self.error_at(start, &messages::UNTERMINATED_COMMENT, &[])),
                            Some('*') if self.char_at(1) == Some('/') => {
                                self.pos += 2;
                                break;
                            }
                            Some(c) => {
                                if is_line_break(c) {
                                    self.preceding_line_break = true;
                                }
                                self.pos += 1;
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Scan the next token. Returns the end-of-file token once input is exhausted.
    pub fn scan(&mut self) -> Result<Token> {
        self.preceding_line_break = false;
        self.skip_trivia()?;
        self.token_start = self.pos;

        let Some(ch) = self.current_char() else {
            return Ok(self.make_token(SyntaxKind::EndOfFileToken));
        };

        match ch {
            '\'' | '"' => self.scan_string_literal(ch),
            '0'..='9' => self.scan_number(),
            '.' if self.char_at(1).is_some_and(is_digit) => self.scan_number(),
            '`' => Err(self.error_at(self.pos, &messages::TEMPLATE_LITERALS_NOT_SUPPORTED, &[])),
            '\\' => self.scan_identifier(),
            _ if Identifier::is_start_char(ch) => self.scan_identifier(),
            _ => self.scan_punctuation(ch),
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Longest-match punctuation: try four characters, then three, two and one.
    fn scan_punctuation(&mut self, ch: char) -> Result<Token> {
        let available = self.text.len() - self.pos;
        for len in (1..=available.min(4)).rev() {
            let candidate = self.slice(self.pos, self.pos + len);
            if let Some(kind) = SyntaxKind::from_punctuation(&candidate) {
                self.pos += len;
                return Ok(self.make_token(kind));
            }
        }
        Err(self.error_at(self.pos, &messages::INVALID_CHARACTER, &[&ch.to_string()]))
    }

    fn scan_string_literal(&mut self, quote: char) -> Result<Token> {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            let Some(ch) = self.current_char() else {
                return Err(self.unterminated_string(start));
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            // U+2028 and U+2029 are allowed inside strings.
            if matches!(ch, '\n' | '\r') {
                return Err(self.unterminated_string(start));
            }
            if ch == '\\' {
                self.scan_escape_sequence(start, &mut value)?;
                continue;
            }
            value.push(ch);
            self.pos += 1;
        }
        Ok(self.make_token(SyntaxKind::StringLiteral).with_value(TokenValue::String(value)))
    }

    fn unterminated_string(&self, start: usize) -> SyntaxError {
        let end = self.pos.min(self.text.len());
        let raw = self.slice(start, end);
        self.error_at(start, &messages::UNTERMINATED_STRING_LITERAL, &[&raw])
    }

    /// Decode one escape sequence inside a string literal. `pos` is at the backslash.
    fn scan_escape_sequence(&mut self, string_start: usize, value: &mut String) -> Result<()> {
        let escape_start = self.pos;
        self.pos += 1;
        let Some(ch) = self.current_char() else {
            return Err(self.unterminated_string(string_start));
        };
        self.pos += 1;
        match ch {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'b' => value.push('\u{0008}'),
            'f' => value.push('\u{000C}'),
            'v' => value.push('\u{000B}'),
            '0' if !self.current_char().is_some_and(is_digit) => value.push('\0'),
            '0'..='7' => {
                while self.current_char().is_some_and(|c| digit_value(c, 8).is_some()) {
                    self.pos += 1;
                }
                let raw = self.slice(escape_start, self.pos);
                return Err(self.error_at(escape_start, &messages::OCTAL_ESCAPE_NOT_ALLOWED, &[&raw]));
            }
            '8' | '9' => {
                let raw = self.slice(escape_start, self.pos);
                return Err(self.error_at(escape_start, &messages::INVALID_ESCAPE_SEQUENCE, &[&raw]));
            }
            'x' => {
                let code = self.scan_exact_hex_digits(2, escape_start)?;
                // Two hex digits are always a valid scalar value.
                value.extend(char::from_u32(code));
            }
            'u' => {
                self.pos = escape_start;
                let decoded = self.scan_unicode_escape(true)?;
                value.push(decoded);
            }
            '\r' => {
                if self.current_char() == Some('\n') {
                    self.pos += 1;
                }
            }
            c if is_line_break(c) => {}
            c => value.push(c),
        }
        Ok(())
    }

    /// Read exactly `count` hex digits.
    fn scan_exact_hex_digits(&mut self, count: usize, escape_start: usize) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..count {
            match self.current_char().and_then(hex_value) {
                Some(digit) => {
                    code = code * 16 + digit;
                    self.pos += 1;
                }
                None => {
                    let raw = self.slice(escape_start, self.pos);
                    return Err(self.error_at(escape_start, &messages::HEXADECIMAL_DIGIT_EXPECTED, &[&raw]));
                }
            }
        }
        Ok(code)
    }

    /// Decode `\uXXXX` or `\u{X...}` starting at the backslash. Inside strings a
    /// high surrogate escape may be followed by a low surrogate escape, and the
    /// pair decodes to one character.
    fn scan_unicode_escape(&mut self, allow_surrogate_pair: bool) -> Result<char> {
        let escape_start = self.pos;
        if self.current_char() != Some('\\') || self.char_at(1) != Some('u') {
            let raw = self.slice(escape_start, (self.pos + 1).min(self.text.len()));
            return Err(self.error_at(escape_start, &messages::INVALID_IDENTIFIER_ESCAPE, &[&raw]));
        }
        self.pos += 2;

        let code = if self.current_char() == Some('{') {
            self.pos += 1;
            let mut code = 0u32;
            let mut digits = 0;
            while let Some(digit) = self.current_char().and_then(hex_value) {
                code = code.saturating_mul(16).saturating_add(digit);
                digits += 1;
                self.pos += 1;
            }
            if digits == 0 || self.current_char() != Some('}') {
                let raw = self.slice(escape_start, self.pos);
                return Err(self.error_at(escape_start, &messages::HEXADECIMAL_DIGIT_EXPECTED, &[&raw]));
            }
            self.pos += 1;
            code
        } else {
            let code = self.scan_exact_hex_digits(4, escape_start)?;
            if allow_surrogate_pair && (0xD800..=0xDBFF).contains(&code) && self.current_char() == Some('\\') && self.char_at(1) == Some('u') {
                let low_start = self.pos;
                self.pos += 2;
                match self.scan_exact_hex_digits(4, low_start) {
                    Ok(low) if (0xDC00..=0xDFFF).contains(&low) => {
                        let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                        return Ok(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                    }
                    _ => self.pos = low_start,
                }
            }
            code
        };

        char::from_u32(code).ok_or_else(|| {
            let raw = self.slice(escape_start, self.pos);
            self.error_at(escape_start, &messages::INVALID_UNICODE_CODE_POINT, &[&raw])
        })
    }

    fn scan_number(&mut self) -> Result<Token> {
        let start = self.pos;
        let radix = match (self.current_char(), self.char_at(1)) {
            (Some('0'), Some('x' | 'X')) => Some(NumericLiteralKind::Hex),
            (Some('0'), Some('b' | 'B')) => Some(NumericLiteralKind::Binary),
            (Some('0'), Some('o' | 'O')) => Some(NumericLiteralKind::Octal),
            _ => None,
        };

        let token = match radix {
            Some(kind) => self.scan_radix_number(start, kind)?,
            None => self.scan_decimal_number(start)?,
        };

        if let Some(ch) = self.current_char() {
            if Identifier::is_start_char(ch) || ch == '\\' || is_digit(ch) {
                let raw = self.slice(start, self.pos + 1);
                return Err(self.error_at(self.pos, &messages::IDENTIFIER_DIRECTLY_AFTER_NUMERIC_LITERAL, &[&raw]));
            }
        }
        Ok(token)
    }

    /// Binary, octal and hexadecimal literals. The value must stay within the
    /// range exactly representable as a double.
    fn scan_radix_number(&mut self, start: usize, kind: NumericLiteralKind) -> Result<Token> {
        self.pos += 2;
        let digits_start = self.pos;
        let mut value: Option<u64> = Some(0);
        while let Some(digit) = self.current_char().and_then(|c| digit_value(c, kind.radix())) {
            value = value
                .and_then(|v| v.checked_mul(kind.radix() as u64))
                .and_then(|v| v.checked_add(digit as u64));
            self.pos += 1;
        }
        if self.pos == digits_start {
            let raw = self.slice(start, self.pos);
            return Err(self.error_at(start, &messages::DIGIT_EXPECTED, &[&raw]));
        }
        let raw = self.slice(start, self.pos);
        let value = match value {
            Some(v) if (v as f64) <= kind.max_value() => v as f64,
            _ => {
                let kind_name = kind.to_string();
                return Err(self.error_at(start, &messages::NUMERIC_LITERAL_OUT_OF_RANGE, &[&raw, &kind_name]));
            }
        };
        Ok(self.make_token(SyntaxKind::NumericLiteral).with_value(TokenValue::Number { value, kind }))
    }

    fn scan_decimal_number(&mut self, start: usize) -> Result<Token> {
        if self.current_char() == Some('0') && self.char_at(1).is_some_and(is_digit) {
            self.pos += 1;
            self.scan_digits();
            let digits = self.slice(start + 1, self.pos);
            return Err(self.error_at(start, &messages::LEGACY_OCTAL_LITERAL, &[&digits]));
        }

        self.scan_digits();
        if self.current_char() == Some('.') {
            self.pos += 1;
            self.scan_digits();
        }
        if matches!(self.current_char(), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.current_char(), Some('+' | '-')) {
                self.pos += 1;
            }
            if !self.current_char().is_some_and(is_digit) {
                let raw = self.slice(start, self.pos);
                return Err(self.error_at(start, &messages::DIGIT_EXPECTED, &[&raw]));
            }
            self.scan_digits();
        }

        let raw = self.slice(start, self.pos);
        let kind = NumericLiteralKind::Decimal;
        let value = match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                let kind_name = kind.to_string();
                return Err(self.error_at(start, &messages::NUMERIC_LITERAL_OUT_OF_RANGE, &[&raw, &kind_name]));
            }
        };
        Ok(self.make_token(SyntaxKind::NumericLiteral).with_value(TokenValue::Number { value, kind }))
    }

    fn scan_digits(&mut self) {
        while self.current_char().is_some_and(is_digit) {
            self.pos += 1;
        }
    }

    /// Identifiers and keywords. Unicode escapes are decoded into the token's
    /// value; a word spelled with escapes is never a keyword.
    fn scan_identifier(&mut self) -> Result<Token> {
        let mut name = String::new();
        let mut has_escape = false;
        loop {
            let Some(ch) = self.current_char() else { break };
            let decoded = if ch == '\\' {
                let escape_start = self.pos;
                let decoded = self.scan_unicode_escape(false)?;
                let valid = if name.is_empty() {
                    Identifier::is_start_char(decoded)
                } else {
                    Identifier::is_part_char(decoded)
                };
                if !valid {
                    let raw = self.slice(escape_start, self.pos);
                    return Err(self.error_at(escape_start, &messages::INVALID_IDENTIFIER_ESCAPE, &[&raw]));
                }
                has_escape = true;
                decoded
            } else if (name.is_empty() && Identifier::is_start_char(ch)) || (!name.is_empty() && Identifier::is_part_char(ch)) {
                self.pos += 1;
                ch
            } else {
                break;
            };
            name.push(decoded);
        }

        if !has_escape {
            if let Some(kind) = SyntaxKind::from_keyword(&name) {
                let token = self.make_token(kind);
                return Ok(match kind {
                    SyntaxKind::TrueKeyword => token.with_value(TokenValue::Boolean(true)),
                    SyntaxKind::FalseKeyword => token.with_value(TokenValue::Boolean(false)),
                    _ => token,
                });
            }
        }
        Ok(self.make_token(SyntaxKind::Identifier).with_value(TokenValue::Identifier(name)))
    }
}
