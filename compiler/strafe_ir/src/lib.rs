//! Strafe IR - shared front-end types
//!
//! This crate contains the data structures every stage of the strafe
//! pipeline agrees on:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - Binary/unary operators with their precedence
//! - AST nodes (`Expr`, `Stmt`, `Block`) as closed sum types
//! - The closed movement verb and builtin tables
//!
//! The AST owns its children directly (`Box`/`Vec`); a script is small and
//! is walked once, so no arena is involved.

pub mod ast;
mod operators;
mod span;
mod token;
pub mod verbs;

pub use ast::{Block, Callee, CallExpr, Expr, ExprKind, FuncDecl, Literal, LiteralKind, Stmt};
pub use operators::{BinaryOp, UnaryOp, UNARY_PRECEDENCE};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use verbs::{Arity, Builtin, Gait, Motion, MoveShape, VerbKind};
