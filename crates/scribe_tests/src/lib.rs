//! scribe_tests: Cross-crate test harness.
//!
//! Drives text through the whole pipeline (scan, parse, emit, parse again)
//! and checks that nothing is lost on the way.

use scribe_ast::SourceFile;
use scribe_diagnostics::SyntaxError;
use scribe_emitter::{emit_to_string, EmitOptions};

/// How a round trip went wrong.
#[derive(Debug, thiserror::Error)]
pub enum RoundTripError {
    #[error("source failed to parse: {0}")]
    Parse(SyntaxError),
    #[error("emitted text failed to parse: {error}\n--- emitted ---\n{text}")]
    Reparse { text: String, error: SyntaxError },
    #[error("reparsed tree differs from the original\n--- emitted ---\n{text}")]
    TreeMismatch { text: String },
    #[error("emitting the reparsed tree changed the text\n--- first ---\n{first}\n--- second ---\n{second}")]
    Unstable { first: String, second: String },
}

/// Parse `source`, emit it, and parse the emitted text again.
///
/// Succeeds with the emitted text when the second tree equals the first and
/// emitting the second tree reproduces the same text.
pub fn round_trip(source: &str, options: &EmitOptions) -> Result<String, RoundTripError> {
    let original = scribe_parser::parse_source(source).map_err(RoundTripError::Parse)?;
    let text = emit_to_string(&original, options);
    let reparsed = match scribe_parser::parse_source(&text) {
        Ok(reparsed) => reparsed,
        Err(error) => return Err(RoundTripError::Reparse { text, error }),
    };
    if reparsed != original {
        return Err(RoundTripError::TreeMismatch { text });
    }
    let second = emit_to_string(&reparsed, options);
    if second != text {
        return Err(RoundTripError::Unstable { first: text, second });
    }
    Ok(text)
}

/// Parse `source` and emit it under `options`.
pub fn reformat(source: &str, options: &EmitOptions) -> Result<String, SyntaxError> {
    let source_file: SourceFile = scribe_parser::parse_source(source)?;
    Ok(emit_to_string(&source_file, options))
}

/// A handful of option sets that exercise every formatting switch.
pub fn option_matrix() -> Vec<(&'static str, EmitOptions)> {
    let base = EmitOptions::default().with_newline("\n");
    vec![
        ("default", base.clone()),
        (
            "compact",
            base.clone()
                .with_space_after_colon(false)
                .with_space_after_comma(false)
                .with_space_around_operators(false)
                .with_space_after_keyword(false)
                .with_space_within_braces(false),
        ),
        (
            "roomy",
            base.clone()
                .with_space_within_parentheses(true)
                .with_space_after_function_keyword(true)
                .with_indentation_prefix("\t"),
        ),
        ("allman", base.clone().with_brace_on_new_line(true).with_newline("\r\n")),
        ("one_line_blocks", base.clone().with_simple_block_on_new_line(false)),
        ("single_line", EmitOptions::single_line()),
    ]
}
