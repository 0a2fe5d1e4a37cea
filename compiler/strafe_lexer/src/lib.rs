//! Lexer for strafe scripts using logos.
//!
//! Names are classified after matching: a name in the closed verb table
//! becomes [`TokenKind::Verb`], a builtin name becomes
//! [`TokenKind::Builtin`], anything else stays an identifier. Characters
//! logos cannot match become [`TokenKind::Unknown`] tokens; the lexer itself
//! never fails.

use logos::Logos;
use strafe_ir::verbs::lookup_verb;
use strafe_ir::{Builtin, Span, Token, TokenKind};

/// Raw token from logos (before name classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    // === Comments (skip) ===
    #[regex(r"//[^\n]*")]
    LineComment,

    // === Keywords ===
    #[token("let")]
    Let,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("tap")]
    Tap,
    #[token("fn")]
    Fn,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Symbols ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("|")]
    Pipe,

    // === Operators ===
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // === Modifiers ===
    // Input mask: .wa
    #[regex(r"\.[A-Za-z]+")]
    DotModifier,
    // Reserved: [anything]
    #[regex(r"\[[^\]\n]*\]")]
    BracketModifier,

    // === Literals ===
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    #[regex(r#""[^"]*""#)]
    String,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Pull-based lexer over a script.
///
/// [`Lexer::next_token`] consumes exactly one token; once the input is
/// exhausted it returns an `Eof` token on every call.
pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken>,
    end: u32,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            end: u32::try_from(source.len()).unwrap_or(u32::MAX),
            finished: false,
        }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::eof(self.end);
        }
        loop {
            let Some(result) = self.raw.next() else {
                self.finished = true;
                return Token::eof(self.end);
            };
            let span = Span::from_range(self.raw.span());
            let slice = self.raw.slice();
            return match result {
                Ok(RawToken::LineComment) => continue,
                Ok(raw) => convert_token(raw, slice, span),
                Err(()) => Token::new(TokenKind::Unknown, slice, span),
            };
        }
    }
}

/// Lex a whole script. The last token is always `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Classify a name against the verb and builtin tables.
pub fn classify_name(name: &str) -> TokenKind {
    if lookup_verb(name).is_some() {
        TokenKind::Verb
    } else if Builtin::from_name(name).is_some() {
        TokenKind::Builtin
    } else {
        TokenKind::Ident
    }
}

fn convert_token(raw: RawToken, slice: &str, span: Span) -> Token {
    let kind = match raw {
        // Literals
        RawToken::Int => TokenKind::Int,
        RawToken::Float => TokenKind::Float,
        RawToken::String => {
            let content = slice
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(slice);
            return Token::new(TokenKind::Str, content, span);
        }
        RawToken::True | RawToken::False => TokenKind::Bool,
        RawToken::Ident => classify_name(slice),

        // Modifiers
        RawToken::DotModifier | RawToken::BracketModifier => TokenKind::Modifier,

        // Keywords
        RawToken::Let => TokenKind::Let,
        RawToken::For => TokenKind::For,
        RawToken::While => TokenKind::While,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Tap => TokenKind::Tap,
        RawToken::Fn => TokenKind::Fn,

        // Symbols
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Pipe => TokenKind::Pipe,

        // Operators
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::AmpAmp => TokenKind::AndAnd,
        RawToken::PipePipe => TokenKind::OrOr,

        // Filtered out in `next_token`
        RawToken::LineComment => TokenKind::Unknown,
    };
    Token::new(kind, slice, span)
}
