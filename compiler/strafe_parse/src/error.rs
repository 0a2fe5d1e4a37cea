//! Parse error types.
//!
//! Every parse error is fatal: the parser stops at the first one and does
//! not resynchronize.

use strafe_ir::{Span, Token};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },
    #[error("expected an expression, found {found}")]
    InvalidExpressionStart { found: String },
    #[error("cannot redefine builtin `{name}`")]
    RedefinedBuiltin { name: String },
    #[error("invalid {kind} literal `{text}`")]
    InvalidLiteral { kind: &'static str, text: String },
    #[error("unterminated block, expected `}}`")]
    UnterminatedBlock,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    #[cold]
    pub fn unexpected(expected: &'static str, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: found.to_string(),
            },
            found.span,
        )
    }

    #[cold]
    pub fn invalid_expression_start(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidExpressionStart {
                found: found.to_string(),
            },
            found.span,
        )
    }

    #[cold]
    pub fn redefined_builtin(name: &Token) -> Self {
        Self::new(
            ParseErrorKind::RedefinedBuiltin {
                name: name.text.clone(),
            },
            name.span,
        )
    }

    #[cold]
    pub fn invalid_literal(kind: &'static str, token: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidLiteral {
                kind,
                text: token.text.clone(),
            },
            token.span,
        )
    }

    #[cold]
    pub fn unterminated_block(open: Span) -> Self {
        Self::new(ParseErrorKind::UnterminatedBlock, open)
    }
}
