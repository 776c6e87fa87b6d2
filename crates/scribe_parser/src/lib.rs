//! scribe_parser: Recursive descent parser for TypeScript.
//!
//! Reads the token sequence produced by `scribe_scanner` through a
//! backtracking [`TokenStream`] and builds the immutable tree defined in
//! `scribe_ast`. Parsing stops at the first error.

mod parser;
mod precedence;
mod token_stream;
mod utilities;

use scribe_ast::{Expression, SourceFile, Statement, TypeNode};
use scribe_diagnostics::Result;
use scribe_scanner::Token;

pub use parser::{Parser, MAX_RECURSION_DEPTH};
pub use precedence::OperatorPrecedence;
pub use token_stream::TokenStream;

/// Parse a whole program from scanned tokens.
pub fn parse(tokens: Vec<Token>) -> Result<SourceFile> {
    let mut reader = TokenStream::new(tokens);
    let source_file = Parser::new(&mut reader).parse_source_file()?;
    tracing::debug!(statements = source_file.statements.len(), "parsed source file");
    Ok(source_file)
}

/// Scan and parse a whole program.
pub fn parse_source(text: &str) -> Result<SourceFile> {
    parse(scribe_scanner::tokenize(text)?)
}

/// Parse tokens that must form exactly one expression.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expression> {
    parse_all(tokens, |parser| parser.parse_expression())
}

/// Parse tokens that must form exactly one statement.
pub fn parse_statement(tokens: Vec<Token>) -> Result<Statement> {
    parse_all(tokens, |parser| parser.parse_statement())
}

/// Parse tokens that must form exactly one type.
pub fn parse_type(tokens: Vec<Token>) -> Result<TypeNode> {
    parse_all(tokens, |parser| parser.parse_type())
}

fn parse_all<T>(tokens: Vec<Token>, production: impl FnOnce(&mut Parser<'_>) -> Result<T>) -> Result<T> {
    let mut reader = TokenStream::new(tokens);
    let mut parser = Parser::new(&mut reader);
    let node = production(&mut parser)?;
    parser.expect_end()?;
    Ok(node)
}
