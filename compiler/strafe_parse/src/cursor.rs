//! Token cursor over the lazy lexer.
//!
//! Holds the current token and one token of lookahead; tokens are pulled
//! from the lexer only as the parser advances.

use std::mem;

use strafe_ir::{Span, Token, TokenKind};
use strafe_lexer::Lexer;

use crate::ParseError;

pub struct Cursor<'src> {
    lexer: Lexer<'src>,
    current: Token,
    next: Token,
    previous_span: Span,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        let next = lexer.next_token();
        Cursor {
            lexer,
            current,
            next,
            previous_span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current.span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        self.previous_span
    }

    /// One-token lookahead past the current token.
    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.next.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token and return it.
    ///
    /// At end of input this keeps returning `Eof`.
    pub fn advance(&mut self) -> Token {
        let pulled = self.lexer.next_token();
        let next = mem::replace(&mut self.next, pulled);
        let consumed = mem::replace(&mut self.current, next);
        self.previous_span = consumed.span;
        consumed
    }

    /// Consume a token of `kind`, or fail naming what was `expected`.
    pub fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(expected, &self.current))
        }
    }
}
