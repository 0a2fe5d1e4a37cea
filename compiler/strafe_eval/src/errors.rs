//! Evaluation errors.
//!
//! Every `EvalError` is fatal and aborts the run. Soft problems (an
//! undefined variable, an unusable argument) are warnings reported through
//! the print handler instead and never reach this type.
//!
//! Factory functions are the public way to build errors; they are `#[cold]`
//! so the happy path of operator dispatch stays tight.

use strafe_ir::{BinaryOp, Span, UnaryOp};
use thiserror::Error;

use crate::Value;

/// Result of evaluating an expression: `None` when it produced no value.
pub type EvalResult = Result<Option<Value>, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("invalid operands for `{}`: {left} and {right}", op.as_symbol())]
    BinaryTypeMismatch {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("invalid operand for unary `{}`: {type_name}", op.as_symbol())]
    InvalidUnaryOp {
        op: UnaryOp,
        type_name: &'static str,
    },
    #[error("`{construct}` condition must be bool, got {got}")]
    NonBooleanCondition {
        construct: &'static str,
        got: &'static str,
    },
    #[error("`for` count must be a number, got {got}")]
    InvalidLoopCount { got: &'static str },
    #[error("`{name}` takes {expected} argument(s), got {got}")]
    WrongFunctionArgs {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("operand of `{operation}` has no value")]
    MissingOperand { operation: String },
    #[error("undefined function `{name}`")]
    UndefinedFunction { name: String },
    #[error("maximum call depth of {depth} exceeded")]
    RecursionLimit { depth: usize },
    #[error("invalid literal `{text}`")]
    InvalidLiteral { text: String },
}

/// A fatal evaluation error, located at the innermost expression that
/// raised it when known.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}{}", .span.map(|span| format!(" at {span}")).unwrap_or_default())]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn binary_type_mismatch(op: BinaryOp, left: &'static str, right: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, type_name: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidUnaryOp { op, type_name })
}

#[cold]
pub fn non_boolean_condition(construct: &'static str, got: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::NonBooleanCondition { construct, got })
}

#[cold]
pub fn invalid_loop_count(got: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidLoopCount { got })
}

#[cold]
pub fn wrong_function_args(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::new(EvalErrorKind::WrongFunctionArgs {
        name: name.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn missing_operand(operation: &str) -> EvalError {
    EvalError::new(EvalErrorKind::MissingOperand {
        operation: operation.to_owned(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedFunction {
        name: name.to_owned(),
    })
}

#[cold]
pub fn recursion_limit(depth: usize) -> EvalError {
    EvalError::new(EvalErrorKind::RecursionLimit { depth })
}

#[cold]
pub fn invalid_literal(text: &str) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidLiteral {
        text: text.to_owned(),
    })
}
