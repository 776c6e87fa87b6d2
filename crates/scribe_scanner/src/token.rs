//! Tokens produced by the scanner.

use scribe_ast::syntax_kind::SyntaxKind;
use scribe_ast::NumericLiteralKind;
use scribe_core::text::SourceLocation;

/// The decoded value carried by literal and identifier tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// `true` / `false`
    Boolean(bool),
    Number { value: f64, kind: NumericLiteralKind },
    /// The cooked value of a string literal.
    String(String),
    /// The identifier text with escapes decoded.
    Identifier(String),
}

/// A scanned token.
///
/// Equality compares the kind and the raw source text only.
#[derive(Debug, Clone)]
pub struct Token {
    /// The lexical category.
    pub kind: SyntaxKind,
    /// The token exactly as written in the source.
    pub text: String,
    /// The decoded value, for literals and identifiers.
    pub value: Option<TokenValue>,
    /// Where the token starts.
    pub location: SourceLocation,
    /// Whether a line terminator appeared between this token and the previous one.
    pub preceded_by_line_break: bool,
}

impl Token {
    pub fn new(kind: SyntaxKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            value: None,
            location,
            preceded_by_line_break: false,
        }
    }

    /// The end-of-input sentinel at `location`.
    pub fn end_of_file(location: SourceLocation) -> Self {
        Self::new(SyntaxKind::EndOfFileToken, "", location)
    }

    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_line_break(mut self, preceded_by_line_break: bool) -> Self {
        self.preceded_by_line_break = preceded_by_line_break;
        self
    }

    #[inline]
    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == SyntaxKind::EndOfFileToken
    }

    /// The identifier this token spells: decoded text for identifiers, the
    /// keyword text for keywords.
    pub fn identifier_text(&self) -> &str {
        match &self.value {
            Some(TokenValue::Identifier(name)) => name,
            _ => &self.text,
        }
    }

    /// The location just past the end of this token, assuming it spans one line.
    pub fn end_location(&self) -> SourceLocation {
        self.location.advance(self.text.chars().count())
    }

    /// A short description for error messages.
    pub fn describe(&self) -> String {
        if self.is_eof() {
            SyntaxKind::EndOfFileToken.to_string()
        } else {
            self.text.clone()
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_location_and_value() {
        let a = Token::new(SyntaxKind::Identifier, "a", SourceLocation::new(1, 1));
        let b = Token::new(SyntaxKind::Identifier, "a", SourceLocation::new(7, 3))
            .with_value(TokenValue::Identifier("a".into()));
        assert_eq!(a, b);
        assert_ne!(a, Token::new(SyntaxKind::Identifier, "b", SourceLocation::START));
    }

    #[test]
    fn test_identifier_text_prefers_decoded_value() {
        let token = Token::new(SyntaxKind::Identifier, "\\u0061", SourceLocation::START)
            .with_value(TokenValue::Identifier("a".into()));
        assert_eq!(token.identifier_text(), "a");
        let keyword = Token::new(SyntaxKind::ClassKeyword, "class", SourceLocation::START);
        assert_eq!(keyword.identifier_text(), "class");
        assert_eq!(keyword.end_location(), SourceLocation::new(1, 6));
    }
}
