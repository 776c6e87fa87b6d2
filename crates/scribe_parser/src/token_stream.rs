//! A cursor over scanned tokens with lookahead and transactional backtracking.

use std::ops::{Deref, DerefMut};

use scribe_ast::syntax_kind::SyntaxKind;
use scribe_core::text::SourceLocation;
use scribe_diagnostics::{messages, Result, SyntaxError};
use scribe_scanner::Token;

/// Reads tokens for the parser.
///
/// The stream always ends with an end-of-file token, and every read or peek
/// past the end yields that token again, so callers never handle exhaustion.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
    /// The remainder of a `>`-prefixed token whose leading `>` was read on its own.
    split: Option<Token>,
    saved_state_depth: usize,
}

impl TokenStream {
    /// Wrap a token sequence. An end-of-file token is appended when the
    /// sequence does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let location = tokens.last().map_or(SourceLocation::START, Token::end_location);
            tokens.push(Token::end_of_file(location));
        }
        Self {
            tokens,
            index: 0,
            split: None,
            saved_state_depth: 0,
        }
    }

    /// Position of the cursor in the token sequence.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Number of `read_with_saved_state` calls currently executing.
    #[inline]
    pub fn saved_state_depth(&self) -> usize {
        self.saved_state_depth
    }

    // ========================================================================
    // Lookahead
    // ========================================================================

    /// The next token, without consuming it.
    #[inline]
    pub fn peek(&self) -> &Token {
        self.peek_n(0)
    }

    /// The token `n` positions ahead of the cursor (`peek_n(0)` is `peek()`).
    pub fn peek_n(&self, n: usize) -> &Token {
        if n == 0 {
            if let Some(token) = &self.split {
                return token;
            }
        }
        let last = self.tokens.len() - 1;
        &self.tokens[(self.index + n).min(last)]
    }

    /// Whether the upcoming tokens have exactly the given kinds, in order.
    pub fn is_next(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.iter().enumerate().all(|(i, kind)| self.peek_n(i).kind == *kind)
    }

    /// Where the next token starts.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.peek().location
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    // ========================================================================
    // Consumption
    // ========================================================================

    /// Consume and return the next token.
    pub fn read(&mut self) -> Token {
        if let Some(token) = self.split.take() {
            self.advance();
            return token;
        }
        let token = self.tokens[self.index].clone();
        self.advance();
        token
    }

    /// Consume and return the next `n` tokens.
    pub fn read_n(&mut self, n: usize) -> Vec<Token> {
        (0..n).map(|_| self.read()).collect()
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() - 1 {
            self.index += 1;
        }
    }

    /// Consume the next token if it has the given kind.
    pub fn read_if(&mut self, kind: SyntaxKind) -> Option<Token> {
        self.read_if_with(|token| token.kind == kind)
    }

    /// Consume the next token if it satisfies `predicate`.
    pub fn read_if_with(&mut self, predicate: impl FnOnce(&Token) -> bool) -> Option<Token> {
        if predicate(self.peek()) {
            Some(self.read())
        } else {
            None
        }
    }

    #[inline]
    pub fn skip(&mut self) {
        self.read();
    }

    /// Skip the next token if it has the given kind, reporting whether it did.
    pub fn skip_if(&mut self, kind: SyntaxKind) -> bool {
        self.read_if(kind).is_some()
    }

    /// Consume a token of the given kind or fail with "'X' expected, found 'Y'".
    pub fn read_expected(&mut self, kind: SyntaxKind) -> Result<Token> {
        if self.peek().kind == kind {
            return Ok(self.read());
        }
        let expected = kind.text().map_or_else(|| kind.to_string(), str::to_string);
        let found = self.peek().describe();
        Err(SyntaxError::new(&messages::_0_EXPECTED_FOUND_1, &[&expected, &found], self.location()))
    }

    /// Consume a single `>`, splitting it off `>>`, `>>>`, `>=`, `>>=` or `>>>=`
    /// when a type argument list closes right before another operator.
    pub fn read_greater_than(&mut self) -> Result<Token> {
        let token = self.peek();
        if token.kind != SyntaxKind::GreaterThanToken && token.text.starts_with('>') && token.text.len() > 1 {
            let rest = &token.text[1..];
            if let Some(kind) = SyntaxKind::from_punctuation(rest) {
                let location = token.location;
                let line_break = token.preceded_by_line_break;
                let remainder = Token::new(kind, rest, location.advance(1));
                self.split = Some(remainder);
                return Ok(Token::new(SyntaxKind::GreaterThanToken, ">", location).with_line_break(line_break));
            }
        }
        self.read_expected(SyntaxKind::GreaterThanToken)
    }

    // ========================================================================
    // Saved state
    // ========================================================================

    /// Run `f` speculatively. The cursor is restored afterwards unless
    /// `should_commit` accepts the result; the restore also happens when `f`
    /// unwinds.
    pub fn read_with_saved_state<T>(
        &mut self,
        f: impl FnOnce(&mut TokenStream) -> T,
        should_commit: impl FnOnce(&T) -> bool,
    ) -> T {
        let mut guard = SavedState::new(self);
        let result = f(&mut guard);
        if should_commit(&result) {
            guard.commit();
        }
        result
    }
}

/// A checkpoint of a [`TokenStream`]; rolls the stream back on drop unless committed.
struct SavedState<'s> {
    stream: &'s mut TokenStream,
    index: usize,
    split: Option<Token>,
    committed: bool,
}

impl<'s> SavedState<'s> {
    fn new(stream: &'s mut TokenStream) -> Self {
        stream.saved_state_depth += 1;
        Self {
            index: stream.index,
            split: stream.split.clone(),
            stream,
            committed: false,
        }
    }

    fn commit(&mut self) {
        self.committed = true;
    }
}

impl Deref for SavedState<'_> {
    type Target = TokenStream;

    fn deref(&self) -> &TokenStream {
        self.stream
    }
}

impl DerefMut for SavedState<'_> {
    fn deref_mut(&mut self) -> &mut TokenStream {
        self.stream
    }
}

impl Drop for SavedState<'_> {
    fn drop(&mut self) {
        self.stream.saved_state_depth -= 1;
        if self.committed {
            tracing::trace!(depth = self.stream.saved_state_depth, from = self.index, to = self.stream.index, "commit saved state");
        } else {
            tracing::trace!(depth = self.stream.saved_state_depth, from = self.stream.index, to = self.index, "roll back saved state");
            self.stream.index = self.index;
            self.stream.split = self.split.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_scanner::tokenize;

    fn stream(source: &str) -> TokenStream {
        TokenStream::new(tokenize(source).unwrap())
    }

    #[test]
    fn test_peek_and_read() {
        let mut reader = stream("a + b");
        assert_eq!(reader.peek().text, "a");
        assert_eq!(reader.peek_n(1).kind, SyntaxKind::PlusToken);
        assert!(reader.is_next(&[SyntaxKind::Identifier, SyntaxKind::PlusToken, SyntaxKind::Identifier]));
        assert!(!reader.is_next(&[SyntaxKind::PlusToken]));
        assert_eq!(reader.read().text, "a");
        assert_eq!(reader.read_n(2).len(), 2);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_reads_past_end_return_sentinel() {
        let mut reader = stream("x");
        reader.skip();
        for _ in 0..3 {
            assert!(reader.read().is_eof());
        }
        assert!(reader.peek_n(10).is_eof());
        assert_eq!(reader.location(), SourceLocation::new(1, 2));
    }

    #[test]
    fn test_sentinel_added_to_bare_sequence() {
        let reader = TokenStream::new(Vec::new());
        assert!(reader.is_at_end());
        assert_eq!(reader.location(), SourceLocation::START);
    }

    #[test]
    fn test_conditional_reads() {
        let mut reader = stream("; x");
        assert!(reader.read_if(SyntaxKind::CommaToken).is_none());
        assert!(reader.skip_if(SyntaxKind::SemicolonToken));
        assert!(reader.read_if_with(|t| t.kind.is_identifier()).is_some());
    }

    #[test]
    fn test_read_expected_reports_found_token() {
        let mut reader = stream("x");
        let err = reader.read_expected(SyntaxKind::SemicolonToken).unwrap_err();
        assert_eq!(err.code, messages::_0_EXPECTED_FOUND_1.code);
        assert_eq!(err.message, "';' expected, found 'x'.");
        assert_eq!(err.location, SourceLocation::START);
    }

    #[test]
    fn test_rollback_without_commit() {
        let mut reader = stream("a b c");
        let before = reader.position();
        let count = reader.read_with_saved_state(|r| r.read_n(2).len(), |_| false);
        assert_eq!(count, 2);
        assert_eq!(reader.position(), before);
        assert_eq!(reader.saved_state_depth(), 0);
    }

    #[test]
    fn test_commit_keeps_position() {
        let mut reader = stream("a b c");
        reader.read_with_saved_state(|r| r.skip(), |_| true);
        assert_eq!(reader.peek().text, "b");
        assert_eq!(reader.saved_state_depth(), 0);
    }

    #[test]
    fn test_nested_saved_states() {
        let mut reader = stream("a b c d e");
        reader.skip();
        let outer: Result<()> = reader.read_with_saved_state(
            |r| {
                r.skip();
                assert_eq!(r.saved_state_depth(), 1);
                r.read_with_saved_state(
                    |inner| {
                        inner.read_n(2);
                        assert_eq!(inner.saved_state_depth(), 2);
                    },
                    |_| true,
                );
                assert_eq!(r.peek().text, "e");
                r.read_with_saved_state(|inner| inner.skip(), |_| false);
                assert_eq!(r.peek().text, "e");
                r.read_expected(SyntaxKind::SemicolonToken).map(|_| ())
            },
            Result::is_ok,
        );
        assert!(outer.is_err());
        assert_eq!(reader.peek().text, "b");
        assert_eq!(reader.saved_state_depth(), 0);
    }

    #[test]
    fn test_rollback_on_unwind() {
        let mut reader = stream("a b");
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            reader.read_with_saved_state(
                |r| {
                    r.skip();
                    panic!("abort");
                },
                |_: &()| true,
            )
        }));
        assert!(outcome.is_err());
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.saved_state_depth(), 0);
    }

    #[test]
    fn test_split_greater_than() {
        let mut reader = stream("a>>=b");
        reader.skip();
        let first = reader.read_greater_than().unwrap();
        assert_eq!(first.kind, SyntaxKind::GreaterThanToken);
        assert_eq!(reader.peek().kind, SyntaxKind::GreaterThanEqualsToken);
        assert_eq!(reader.peek().location, SourceLocation::new(1, 3));

        let restored = reader.read_with_saved_state(|r| r.read_greater_than().is_ok(), |_| false);
        assert!(restored);
        assert_eq!(reader.peek().kind, SyntaxKind::GreaterThanEqualsToken);

        assert_eq!(reader.read_greater_than().unwrap().text, ">");
        assert_eq!(reader.read().kind, SyntaxKind::EqualsToken);
        assert_eq!(reader.read().text, "b");
    }
}
