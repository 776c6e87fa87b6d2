//! scribe_diagnostics: The located failure value raised by the scanner and parser.
//!
//! Every failure is terminal for the current parse: the first one aborts and is
//! returned to the caller as a single [`SyntaxError`] carrying a message built
//! from a [`DiagnosticMessage`] template and the source location it applies to.

use scribe_core::text::SourceLocation;
use std::fmt;

/// Which stage of the front end raised the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raised while turning characters into tokens.
    Lexical,
    /// Raised while turning tokens into a syntax tree.
    Grammatical,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical"),
            ErrorKind::Grammatical => write!(f, "grammatical"),
        }
    }
}

/// A diagnostic message template with a code and kind.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 1002, 1101).
    pub code: u32,
    /// The stage that reports this message.
    pub kind: ErrorKind,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A lexical or grammatical failure at a source location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: error SCRIBE{code}: {message}")]
pub struct SyntaxError {
    /// Lexical or grammatical.
    pub kind: ErrorKind,
    /// The diagnostic code of the template this error was built from.
    pub code: u32,
    /// The resolved, human-readable message.
    pub message: String,
    /// Where the failure was detected.
    pub location: SourceLocation,
}

impl SyntaxError {
    /// Build an error from a message template and its arguments.
    pub fn new(message: &DiagnosticMessage, args: &[&str], location: SourceLocation) -> Self {
        Self {
            kind: message.kind,
            code: message.code,
            message: format_message(message.message, args),
            location,
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.kind == ErrorKind::Lexical
    }

    pub fn is_grammatical(&self) -> bool {
        self.kind == ErrorKind::Grammatical
    }
}

/// Result alias used across the front end.
pub type Result<T> = std::result::Result<T, SyntaxError>;

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Lexical, $msg:expr) => {
            DiagnosticMessage { code: $code, kind: ErrorKind::Lexical, message: $msg }
        };
        ($code:expr, Grammatical, $msg:expr) => {
            DiagnosticMessage { code: $code, kind: ErrorKind::Grammatical, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1000, Lexical, "Invalid character '{0}'.");
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1001, Lexical, "Unterminated string literal {0}.");
    pub const UNTERMINATED_COMMENT: DiagnosticMessage = diag!(1002, Lexical, "Unterminated comment; '*/' expected.");
    pub const INVALID_ESCAPE_SEQUENCE: DiagnosticMessage = diag!(1003, Lexical, "Invalid escape sequence '{0}'.");
    pub const HEXADECIMAL_DIGIT_EXPECTED: DiagnosticMessage = diag!(1004, Lexical, "Hexadecimal digit expected in '{0}'.");
    pub const INVALID_UNICODE_CODE_POINT: DiagnosticMessage = diag!(1005, Lexical, "Unicode escape '{0}' is not a valid code point.");
    pub const INVALID_IDENTIFIER_ESCAPE: DiagnosticMessage = diag!(1006, Lexical, "Escape '{0}' does not produce a valid identifier character.");
    pub const DIGIT_EXPECTED: DiagnosticMessage = diag!(1007, Lexical, "Digit expected in numeric literal '{0}'.");
    pub const NUMERIC_LITERAL_OUT_OF_RANGE: DiagnosticMessage = diag!(1008, Lexical, "Numeric literal '{0}' is out of range for a {1} literal.");
    pub const IDENTIFIER_DIRECTLY_AFTER_NUMERIC_LITERAL: DiagnosticMessage = diag!(1009, Lexical, "An identifier or keyword cannot immediately follow a numeric literal: '{0}'.");
    pub const TEMPLATE_LITERALS_NOT_SUPPORTED: DiagnosticMessage = diag!(1010, Lexical, "Template literals are not supported yet.");
    pub const OCTAL_ESCAPE_NOT_ALLOWED: DiagnosticMessage = diag!(1011, Lexical, "Octal escape sequences are not allowed: '{0}'.");
    pub const LEGACY_OCTAL_LITERAL: DiagnosticMessage = diag!(1012, Lexical, "Octal literals are not allowed; use the syntax '0o{0}'.");

    // ========================================================================
    // Parser errors (1100-1199)
    // ========================================================================
    pub const _0_EXPECTED_FOUND_1: DiagnosticMessage = diag!(1100, Grammatical, "'{0}' expected, found '{1}'.");
    pub const IDENTIFIER_EXPECTED_FOUND_0: DiagnosticMessage = diag!(1101, Grammatical, "Identifier expected, found '{0}'.");
    pub const EXPRESSION_EXPECTED_FOUND_0: DiagnosticMessage = diag!(1102, Grammatical, "Expression expected, found '{0}'.");
    pub const TYPE_EXPECTED_FOUND_0: DiagnosticMessage = diag!(1103, Grammatical, "Type expected, found '{0}'.");
    pub const PROPERTY_NAME_EXPECTED_FOUND_0: DiagnosticMessage = diag!(1104, Grammatical, "Property name expected, found '{0}'.");
    pub const DECLARATION_EXPECTED_FOUND_0: DiagnosticMessage = diag!(1105, Grammatical, "Declaration expected, found '{0}'.");
    pub const UNEXPECTED_TOKEN_0: DiagnosticMessage = diag!(1106, Grammatical, "Unexpected token '{0}'.");
    pub const INVALID_LEFT_HAND_SIDE_0: DiagnosticMessage = diag!(1107, Grammatical, "Invalid left-hand side in {0}.");
    pub const LINE_BREAK_NOT_PERMITTED_AFTER_0: DiagnosticMessage = diag!(1108, Grammatical, "Line break not permitted after '{0}'.");
    pub const ONLY_ONE_VARIABLE_IN_FOR_0: DiagnosticMessage = diag!(1109, Grammatical, "Only a single variable declaration is allowed in a 'for...{0}' statement.");
    pub const TRY_NEEDS_CATCH_OR_FINALLY: DiagnosticMessage = diag!(1110, Grammatical, "'catch' or 'finally' expected.");
    pub const MAXIMUM_NESTING_DEPTH_EXCEEDED: DiagnosticMessage = diag!(1111, Grammatical, "Maximum nesting depth of {0} exceeded.");
    pub const INVALID_NODE_0: DiagnosticMessage = diag!(1112, Grammatical, "{0}");
    pub const _0_IS_NOT_SUPPORTED: DiagnosticMessage = diag!(1113, Grammatical, "'{0}' is not supported yet.");
    pub const INDEX_SIGNATURE_PARAMETER_TYPE: DiagnosticMessage = diag!(1114, Grammatical, "An index signature parameter type must be 'string' or 'number'.");
    pub const REST_PARAMETER_MUST_BE_LAST: DiagnosticMessage = diag!(1115, Grammatical, "A rest parameter must be last in a parameter list.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' expected, found '{1}'.", &[";", "}"]), "';' expected, found '}'.");
        assert_eq!(format_message("no args", &[]), "no args");
    }

    #[test]
    fn test_syntax_error_display() {
        let err = SyntaxError::new(
            &messages::UNTERMINATED_STRING_LITERAL,
            &["'ab"],
            SourceLocation::new(1, 5),
        );
        assert!(err.is_lexical());
        assert_eq!(err.code, 1001);
        assert_eq!(err.to_string(), "(1,5): error SCRIBE1001: Unterminated string literal 'ab.");
    }

    #[test]
    fn test_grammatical_error_kind() {
        let err = SyntaxError::new(&messages::_0_EXPECTED_FOUND_1, &[")", ";"], SourceLocation::START);
        assert!(err.is_grammatical());
        assert_eq!(err.message, "')' expected, found ';'.");
    }
}
