//! Expression parsing by precedence climbing.
//!
//! `parse_precedence(min)` parses a prefix expression and then folds in
//! binary operators whose precedence is at least `min`. The right operand is
//! parsed at `precedence + 1`, which makes every operator left-associative.

use strafe_ir::verbs::lookup_verb;
use strafe_ir::{
    Arity, BinaryOp, Builtin, CallExpr, Callee, Expr, ExprKind, Literal, LiteralKind, Token,
    TokenKind, UnaryOp, UNARY_PRECEDENCE,
};
use strafe_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{ParseError, Parser};

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::EqEq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::AndAnd => Some(BinaryOp::And),
        TokenKind::OrOr => Some(BinaryOp::Or),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_precedence(0)
    }

    fn parse_precedence(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;
            while let Some(op) = binary_op(self.cursor.current_kind()) {
                let precedence = op.precedence();
                if precedence < min_precedence {
                    break;
                }
                self.cursor.advance();
                let right = self.parse_precedence(precedence + 1)?;
                let span = left.span.merge(right.span);
                left = Expr::new(
                    ExprKind::Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    span,
                );
            }
            Ok(left)
        })
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Int | TokenKind::Float | TokenKind::Str | TokenKind::Bool => {
                let token = self.cursor.advance();
                parse_literal(token)
            }
            TokenKind::LParen => {
                let open = self.cursor.advance();
                let inner = self.parse_precedence(0)?;
                if self.cursor.check(TokenKind::RParen) {
                    self.cursor.advance();
                } else {
                    debug!(span = %open.span, "missing `)` tolerated");
                }
                let span = open.span.merge(self.cursor.previous_span());
                Ok(Expr::new(inner.kind, span))
            }
            TokenKind::Minus | TokenKind::Plus => {
                let token = self.cursor.advance();
                let op = if token.kind == TokenKind::Minus {
                    UnaryOp::Neg
                } else {
                    UnaryOp::Plus
                };
                let operand = self.parse_precedence(UNARY_PRECEDENCE)?;
                let span = token.span.merge(operand.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            TokenKind::Verb | TokenKind::Builtin => {
                let name = self.cursor.advance();
                self.parse_call(name)
            }
            TokenKind::Ident if self.functions.contains(&self.cursor.current().text) => {
                let name = self.cursor.advance();
                self.parse_call(name)
            }
            TokenKind::Ident if self.cursor.peek_next_kind() == TokenKind::Eq => {
                let name = self.cursor.advance();
                self.cursor.advance();
                let value = self.parse_expr()?;
                let span = name.span.merge(value.span);
                Ok(Expr::new(
                    ExprKind::Assign {
                        name: name.text,
                        value: Box::new(value),
                    },
                    span,
                ))
            }
            TokenKind::Ident => {
                let name = self.cursor.advance();
                Ok(Expr::new(ExprKind::Var(name.text), name.span))
            }
            _ => Err(ParseError::invalid_expression_start(self.cursor.current())),
        }
    }

    /// `name [.mask | [..]]* arg*`, consuming at most the callee's arity.
    fn parse_call(&mut self, name: Token) -> Result<Expr, ParseError> {
        let (callee, arity) = match name.kind {
            TokenKind::Verb => {
                let verb = lookup_verb(&name.text)
                    .ok_or_else(|| ParseError::invalid_expression_start(&name))?;
                (Callee::Verb(verb), verb.arity())
            }
            TokenKind::Builtin => {
                let builtin = Builtin::from_name(&name.text)
                    .ok_or_else(|| ParseError::invalid_expression_start(&name))?;
                (Callee::Builtin(builtin), builtin.arity())
            }
            _ => {
                let declared = self.functions.arity(&name.text).unwrap_or(0);
                (Callee::User, Arity::Exactly(declared))
            }
        };

        let mut span = name.span;
        let mut inputs = None;
        while self.cursor.check(TokenKind::Modifier) {
            let modifier = self.cursor.advance();
            span = span.merge(modifier.span);
            match modifier.text.strip_prefix('.') {
                Some(mask) => inputs = Some(mask.to_owned()),
                None => debug!(modifier = %modifier.text, "bracket modifiers have no effect"),
            }
        }

        let mut args = Vec::new();
        while arity.max().map_or(true, |max| args.len() < max) && self.can_start_argument() {
            let arg = self.parse_expr()?;
            span = span.merge(arg.span);
            args.push(arg);
        }
        trace!(name = %name.text, args = args.len(), "parsed call");

        Ok(Expr::new(
            ExprKind::Call(CallExpr {
                name: name.text,
                callee,
                inputs,
                args,
            }),
            span,
        ))
    }

    /// Whether the current token may begin a bare call argument.
    ///
    /// Callable names never do, so `walk 5 outx` is two calls; a plain name
    /// followed by `=` starts the next statement's assignment.
    fn can_start_argument(&self) -> bool {
        match self.cursor.current_kind() {
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Str
            | TokenKind::Bool
            | TokenKind::LParen
            | TokenKind::Plus
            | TokenKind::Minus => true,
            TokenKind::Ident => {
                !self.functions.contains(&self.cursor.current().text)
                    && self.cursor.peek_next_kind() != TokenKind::Eq
            }
            _ => false,
        }
    }
}

fn parse_literal(token: Token) -> Result<Expr, ParseError> {
    let kind = match token.kind {
        TokenKind::Int => {
            token
                .text
                .parse::<i32>()
                .map_err(|_| ParseError::invalid_literal("integer", &token))?;
            LiteralKind::Integer
        }
        TokenKind::Float => {
            token
                .text
                .parse::<f32>()
                .map_err(|_| ParseError::invalid_literal("float", &token))?;
            LiteralKind::Float
        }
        TokenKind::Bool => LiteralKind::Boolean,
        _ => LiteralKind::String,
    };
    Ok(Expr::new(
        ExprKind::Literal(Literal {
            kind,
            text: token.text,
        }),
        token.span,
    ))
}
