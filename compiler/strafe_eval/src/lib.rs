//! Strafe Eval - tree-walking interpreter for strafe scripts
//!
//! The interpreter walks a parsed [`Block`](strafe_ir::Block) for effect.
//! Expressions produce an optional [`Value`]; movement verbs and output
//! builtins produce none. The interpreter owns the single
//! [`Player`](strafe_physics::Player) of a run and forwards every movement
//! verb to it.
//!
//! # Architecture
//!
//! - `value`: the four runtime value kinds
//! - `environment`: the flat binding stack
//! - `operators` / `unary_operators`: typed operator dispatch
//! - `errors`: `EvalError` and its factory functions
//! - `print_handler`: where script output and warnings go
//! - `format`: `%g`-style significant digit formatting
//! - `interpreter`: statement/expression walking, builtins and verbs

mod environment;
mod errors;
mod format;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::Environment;
pub use errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_literal,
    invalid_loop_count, invalid_unary_op, missing_operand, non_boolean_condition,
    recursion_limit, undefined_function, wrong_function_args, EvalError, EvalErrorKind,
    EvalResult,
};
pub use format::format_significant;
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_PRECISION, MAX_CALL_DEPTH};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;
