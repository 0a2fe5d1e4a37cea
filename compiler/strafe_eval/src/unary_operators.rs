//! Unary operator implementations for the evaluator.

use strafe_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary_op, EvalError};
use crate::Value;

/// Evaluate a unary operation on a present value.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> Result<Value, EvalError> {
    match (value, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),
        (number @ (Value::Int(_) | Value::Float(_)), UnaryOp::Plus) => Ok(number),
        (other, op) => Err(invalid_unary_op(op, other.type_name())),
    }
}
