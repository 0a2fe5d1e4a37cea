//! Tokens produced by the lexer.

use std::fmt;

use crate::Span;

/// Token kinds for strafe scripts.
///
/// Kinds are payload-free; the raw lexeme lives in [`Token::text`] so the
/// parser can match on `TokenKind` by value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal: 42
    Int,
    /// Float literal: 0.6 (a `.` separates integer and fraction digits)
    Float,
    /// String literal: "hello" (text excludes the quotes)
    Str,
    /// Boolean literal: true, false
    Bool,

    /// Plain identifier: variable, parameter or user function name
    Ident,
    /// Movement verb from the closed verb table: sprintjump45
    Verb,
    /// Builtin from the builtin table: outz, facing, water
    Builtin,
    /// Call modifier: `.wa` (input mask) or `[...]` (reserved)
    Modifier,

    // Keywords
    Let,
    For,
    While,
    If,
    Else,
    Tap,
    Fn,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    /// `|`: reset position
    Pipe,
    /// `=`
    Eq,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    AndAnd,
    OrOr,

    /// Unrecognized input, rejected by the parser
    Unknown,
    /// End of input; returned forever once the source is exhausted
    Eof,
}

impl TokenKind {
    /// Short human-readable name for error messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::Str => "string",
            TokenKind::Bool => "boolean",
            TokenKind::Ident => "identifier",
            TokenKind::Verb => "movement verb",
            TokenKind::Builtin => "builtin",
            TokenKind::Modifier => "modifier",
            TokenKind::Let => "`let`",
            TokenKind::For => "`for`",
            TokenKind::While => "`while`",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::Tap => "`tap`",
            TokenKind::Fn => "`fn`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Pipe => "`|`",
            TokenKind::Eq => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::AndAnd => "`&&`",
            TokenKind::OrOr => "`||`",
            TokenKind::Unknown => "unknown character",
            TokenKind::Eof => "end of input",
        }
    }

    /// Literal tokens.
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Str | TokenKind::Bool
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme. Immutable once produced.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw lexeme; string literals exclude their quotes.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The end-of-input token at byte offset `at`.
    pub fn eof(at: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::new(at, at),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Str => write!(f, "\"{}\"", self.text),
            _ => write!(f, "`{}`", self.text),
        }
    }
}
