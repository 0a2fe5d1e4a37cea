//! AST nodes for strafe scripts.
//!
//! Expressions and statements are closed sum types. Each node owns its
//! children; there is no sharing and no cycles.

use crate::{BinaryOp, Span, UnaryOp, VerbKind};
use crate::verbs::Builtin;

/// Literal kinds as written in source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Integer,
    Float,
    Boolean,
    String,
}

/// A literal with its raw text; conversion to a runtime value happens in
/// the evaluator.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal {
    pub kind: LiteralKind,
    pub text: String,
}

/// What a call resolves to. Decided by the parser from the token kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Callee {
    Verb(VerbKind),
    Builtin(Builtin),
    /// User function declared with `fn`.
    User,
}

/// `name.mask arg arg ...`
#[derive(Clone, PartialEq, Debug)]
pub struct CallExpr {
    pub name: String,
    pub callee: Callee,
    /// Input mask from a `.xyz` modifier, if any.
    pub inputs: Option<String>,
    pub args: Vec<Expr>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Literal(Literal),
    Var(String),
    Assign { name: String, value: Box<Expr> },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary { op: BinaryOp, left: Box<Expr>, right: Box<Expr> },
    Call(CallExpr),
}

#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// `{ ... }` or `tap { ... }`. Opens a variable scope.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    /// Set for `tap` blocks, which report their net movement.
    pub tap: bool,
    pub span: Span,
}

/// `fn name(a b) body`
#[derive(Clone, PartialEq, Debug)]
pub struct FuncDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    Expr(Expr),
    Block(Block),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `for count { ... }`: `count` is evaluated once.
    For { count: Expr, body: Box<Stmt> },
    While { cond: Expr, body: Box<Stmt> },
    Let { name: String, init: Expr, span: Span },
    Fn(FuncDecl),
}
