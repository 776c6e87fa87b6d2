//! scribe_emitter: Syntax tree to source text.
//!
//! Converts any node of a `scribe_ast` tree back into formatted TypeScript.
//! Formatting is controlled by [`EmitOptions`]; output for a given tree and
//! options is always the same.

mod emitter;
mod options;
mod writer;

use std::fmt;
use std::io;

use scribe_ast::AstNode;

pub use emitter::{numeric_literal_text, string_literal_text, Emitter};
pub use options::{platform_newline, EmitOptions, HexLetterCase};
pub use writer::IndentedWriter;

/// Emit `node` as text under `options`.
pub fn emit_to_string<N: AstNode + ?Sized>(node: &N, options: &EmitOptions) -> String {
    let mut emitter = Emitter::new(options);
    emitter.emit(node);
    let text = emitter.into_string();
    tracing::debug!(bytes = text.len(), "emitted node");
    text
}

/// Emit `node` into a text sink.
pub fn emit<N, W>(node: &N, destination: &mut W, options: &EmitOptions) -> fmt::Result
where
    N: AstNode + ?Sized,
    W: fmt::Write + ?Sized,
{
    destination.write_str(&emit_to_string(node, options))
}

/// Emit `node` into a byte sink as UTF-8.
pub fn emit_to_io<N, W>(node: &N, destination: &mut W, options: &EmitOptions) -> io::Result<()>
where
    N: AstNode + ?Sized,
    W: io::Write + ?Sized,
{
    destination.write_all(emit_to_string(node, options).as_bytes())
}

/// Single-line rendering of a node, for diagnostics and debugging.
pub trait CodeDisplay {
    fn code_display(&self) -> String;
}

impl<N: AstNode + ?Sized> CodeDisplay for N {
    fn code_display(&self) -> String {
        let mut text = emit_to_string(self, &EmitOptions::single_line());
        text.truncate(text.trim_end().len());
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_ast::{factory, BinaryOperator, Expression, NumericLiteralKind, Statement};

    fn sum() -> Expression {
        let one = factory::numeric_literal(1.0, NumericLiteralKind::Decimal).unwrap();
        let two = factory::numeric_literal(2.0, NumericLiteralKind::Decimal).unwrap();
        factory::binary_expression(one.into(), BinaryOperator::Add, two.into()).into()
    }

    #[test]
    fn test_emit_into_fmt_sink() {
        let mut text = String::from("x = ");
        emit(&sum(), &mut text, &EmitOptions::default()).unwrap();
        assert_eq!(text, "x = 1 + 2");
    }

    #[test]
    fn test_emit_into_io_sink() {
        let mut bytes = Vec::new();
        emit_to_io(&sum(), &mut bytes, &EmitOptions::default()).unwrap();
        assert_eq!(bytes, b"1 + 2");
    }

    #[test]
    fn test_code_display_is_single_line() {
        let body = vec![factory::expression_statement(sum()).into(), factory::debugger_statement()];
        let statement: Statement = factory::while_statement(sum(), factory::block(body).into()).into();
        assert_eq!(statement.code_display(), "while (1 + 2) { 1 + 2; debugger; }");
    }

    #[test]
    fn test_code_display_of_file_drops_trailing_newline() {
        let file = factory::source_file(vec![factory::empty_statement()]);
        assert_eq!(file.code_display(), ";");
    }
}
