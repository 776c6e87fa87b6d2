//! scribe_scanner: Lexer for TypeScript source code.
//!
//! Converts source text into an eager sequence of [`Token`]s:
//! - Punctuation matched longest-first
//! - Keywords, contextual keywords and identifiers with unicode escapes
//! - Decimal, binary, octal and hexadecimal numeric literals
//! - Single and double quoted string literals with escapes
//!
//! The first lexical failure aborts scanning and is returned as a
//! [`scribe_diagnostics::SyntaxError`].

mod char_codes;
mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenValue};
