//! Binary operator implementations for the evaluator.
//!
//! Arithmetic and ordering accept int/int, float/float and mixed operands;
//! mixed operands promote the int to float. Equality additionally accepts
//! bool/bool and str/str. Logical operators take bools only; the
//! interpreter short-circuits them before reaching this module.

use strafe_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, division_by_zero, integer_overflow, EvalError};
use crate::Value;

/// Checked integer arithmetic: the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i32>, op_name: &'static str) -> Result<Value, EvalError> {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation on two present values.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over freshly evaluated operands"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalError> {
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op),
        (Value::Int(a), Value::Float(b)) => eval_float_binary(*a as f32, *b, op),
        (Value::Float(a), Value::Int(b)) => eval_float_binary(*a, *b as f32, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Str(a), Value::Str(b)) => eval_str_binary(a, b, op),
        _ => Err(binary_type_mismatch(
            op,
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn eval_int_binary(a: i32, b: i32, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        _ => compare(a, b, op, "int"),
    }
}

fn eval_float_binary(a: f32, b: f32, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(Value::Float(a / b))
            }
        }
        _ => compare(a, b, op, "float"),
    }
}

/// Ordering and equality for numbers of one type.
fn compare<T: PartialOrd>(
    a: T,
    b: T,
    op: BinaryOp,
    type_name: &'static str,
) -> Result<Value, EvalError> {
    let result = match op {
        BinaryOp::Eq => a == b,
        BinaryOp::NotEq => a != b,
        BinaryOp::Lt => a < b,
        BinaryOp::LtEq => a <= b,
        BinaryOp::Gt => a > b,
        BinaryOp::GtEq => a >= b,
        _ => return Err(binary_type_mismatch(op, type_name, type_name)),
    };
    Ok(Value::Bool(result))
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        _ => Err(binary_type_mismatch(op, "bool", "bool")),
    }
}

fn eval_str_binary(a: &str, b: &str, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(binary_type_mismatch(op, "str", "str")),
    }
}
