//! Tree-walking interpreter.
//!
//! Statements are executed for effect; expressions yield an optional value.
//! Movement verbs go to the owned [`Player`], builtins are handled in
//! `builtins`, and user functions run their body with parameters bound on
//! top of the caller's binding stack.

mod args;
mod builder;
mod builtins;
mod movement;

use rustc_hash::FxHashMap;
use strafe_ir::{
    BinaryOp, Block, CallExpr, Callee, Expr, ExprKind, FuncDecl, Literal, LiteralKind, Span, Stmt,
};
use strafe_physics::Player;
use strafe_stack::ensure_sufficient_stack;
use tracing::{debug, info, trace};

use crate::errors::{
    invalid_literal, invalid_loop_count, missing_operand, non_boolean_condition, recursion_limit,
    undefined_function, wrong_function_args, EvalError, EvalResult,
};
use crate::{
    evaluate_binary, evaluate_unary, format_significant, Environment, SharedPrintHandler, Value,
};

use args::{report_warning, CallArgs};
pub use builder::InterpreterBuilder;

/// Significant digits of printed numbers unless a script changes it.
pub const DEFAULT_PRECISION: usize = 7;

/// Nesting limit for user function calls.
pub const MAX_CALL_DEPTH: usize = 1024;

/// Interpreter for one script run.
///
/// Borrows the AST it runs: user functions are kept as references into it.
pub struct Interpreter<'a> {
    player: Player,
    env: Environment,
    functions: FxHashMap<&'a str, &'a FuncDecl>,
    precision: usize,
    print: SharedPrintHandler,
    call_depth: usize,
    max_call_depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default configuration, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Current value of a variable visible at top level.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.env.lookup(name)
    }

    /// Run every statement of `script`.
    ///
    /// Top-level bindings stay in place afterwards, so consecutive runs on
    /// one interpreter share variables, functions and player state.
    pub fn run(&mut self, script: &'a Block) -> Result<(), EvalError> {
        script.stmts.iter().try_for_each(|stmt| self.exec_stmt(stmt))
    }

    fn exec_stmt(&mut self, stmt: &'a Stmt) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Expr(expr) => self.eval_expr(expr).map(drop),
            Stmt::Block(block) => self.exec_block(block),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(cond, "if")? {
                    self.exec_stmt(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_stmt(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::For { count, body } => {
                let count = self.eval_loop_count(count)?;
                for _ in 0..count {
                    self.exec_stmt(body)?;
                }
                Ok(())
            }
            Stmt::While { cond, body } => {
                while self.eval_condition(cond, "while")? {
                    self.exec_stmt(body)?;
                }
                Ok(())
            }
            Stmt::Let { name, init, span } => {
                match self.eval_expr(init)? {
                    Some(value) => {
                        trace!(%name, %value, "let");
                        self.env.define(name, value);
                    }
                    None => self.warn(&format!("`let {name}` at {span} has no value")),
                }
                Ok(())
            }
            Stmt::Fn(decl) => {
                debug!(name = %decl.name, params = decl.params.len(), "declared function");
                self.functions.insert(decl.name.as_str(), decl);
                Ok(())
            }
        })
    }

    /// Run a block in its own scope; `tap` blocks report their movement.
    fn exec_block(&mut self, block: &'a Block) -> Result<(), EvalError> {
        let start = self.player;
        let depth = self.env.depth();
        let result = block.stmts.iter().try_for_each(|stmt| self.exec_stmt(stmt));
        self.env.truncate(depth);
        if block.tap && result.is_ok() {
            self.report_tap(&start, block.span);
        }
        result
    }

    fn report_tap(&self, start: &Player, span: Span) {
        let moved = self.player.position - start.position;
        let accelerated = self.player.velocity - start.velocity;
        info!(
            %span,
            dx = moved.x,
            dz = moved.y,
            dvx = accelerated.x,
            dvz = accelerated.y,
            "tap"
        );
        let fmt = |value: f64| format_significant(value, self.precision);
        self.print.diagnostic(&format!(
            "tap: moved ({}, {}), velocity changed by ({}, {})",
            fmt(moved.x),
            fmt(moved.y),
            fmt(accelerated.x),
            fmt(accelerated.y)
        ));
    }

    fn eval_condition(&mut self, cond: &'a Expr, construct: &'static str) -> Result<bool, EvalError> {
        match self.eval_operand(cond, construct)? {
            Value::Bool(b) => Ok(b),
            other => Err(non_boolean_condition(construct, other.type_name()).or_span(cond.span)),
        }
    }

    /// Iteration count of a `for`: ints as is, floats truncated.
    fn eval_loop_count(&mut self, count: &'a Expr) -> Result<i32, EvalError> {
        match self.eval_operand(count, "for")? {
            Value::Int(n) => Ok(n),
            Value::Float(f) => Ok(f as i32),
            other => Err(invalid_loop_count(other.type_name()).or_span(count.span)),
        }
    }

    pub(crate) fn eval_expr(&mut self, expr: &'a Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_kind(expr)).map_err(|err| err.or_span(expr.span))
    }

    fn eval_expr_kind(&mut self, expr: &'a Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => eval_literal(literal).map(Some),
            ExprKind::Var(name) => {
                if let Some(value) = self.env.lookup(name) {
                    Ok(Some(value.clone()))
                } else {
                    self.warn(&format!("undefined variable `{name}` at {}", expr.span));
                    Ok(None)
                }
            }
            ExprKind::Assign { name, value } => self.eval_assign(name, value),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_operand(operand, op.as_symbol())?;
                evaluate_unary(value, *op).map(Some)
            }
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right),
            ExprKind::Call(call) => self.eval_call(call),
        }
    }

    /// Evaluate an expression whose value is required by `operation`.
    fn eval_operand(&mut self, expr: &'a Expr, operation: &str) -> Result<Value, EvalError> {
        self.eval_expr(expr)?
            .ok_or_else(|| missing_operand(operation).or_span(expr.span))
    }

    /// `&&` and `||` short-circuit; their left operand must be a bool.
    fn eval_binary(&mut self, op: BinaryOp, left: &'a Expr, right: &'a Expr) -> EvalResult {
        let lhs = self.eval_operand(left, op.as_symbol())?;
        if op.is_logical() {
            match (&lhs, op) {
                (Value::Bool(false), BinaryOp::And) => return Ok(Some(Value::Bool(false))),
                (Value::Bool(true), BinaryOp::Or) => return Ok(Some(Value::Bool(true))),
                (Value::Bool(_), _) => {}
                (other, _) => {
                    return Err(non_boolean_condition(op.as_symbol(), other.type_name())
                        .or_span(left.span))
                }
            }
        }
        let rhs = self.eval_operand(right, op.as_symbol())?;
        evaluate_binary(lhs, rhs, op).map(Some)
    }

    /// Assignment to the innermost binding; yields the assigned value.
    fn eval_assign(&mut self, name: &str, value: &'a Expr) -> EvalResult {
        let Some(value) = self.eval_expr(value)? else {
            self.warn(&format!("nothing to assign to `{name}`"));
            return Ok(None);
        };
        match self.env.lookup_mut(name) {
            Some(slot) => {
                *slot = value.clone();
                Ok(Some(value))
            }
            None => {
                self.warn(&format!("assignment to undeclared variable `{name}`"));
                Ok(None)
            }
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(name = %call.name))]
    fn eval_call(&mut self, call: &'a CallExpr) -> EvalResult {
        match &call.callee {
            Callee::Verb(verb) => {
                self.call_verb(*verb, call)?;
                Ok(None)
            }
            Callee::Builtin(builtin) => {
                self.call_builtin(*builtin, call)?;
                Ok(None)
            }
            Callee::User => self.call_function(call),
        }
    }

    /// Evaluate every argument; unusable ones are kept as `None`.
    fn eval_args(&mut self, call: &'a CallExpr) -> Result<CallArgs<'a>, EvalError> {
        let values = call
            .args
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CallArgs::new(&call.name, values, self.print.clone()))
    }

    fn call_function(&mut self, call: &'a CallExpr) -> EvalResult {
        let Some(decl) = self.functions.get(call.name.as_str()).copied() else {
            return Err(undefined_function(&call.name));
        };
        if call.args.len() != decl.params.len() {
            return Err(wrong_function_args(
                &call.name,
                decl.params.len(),
                call.args.len(),
            ));
        }
        if self.call_depth >= self.max_call_depth {
            return Err(recursion_limit(self.max_call_depth));
        }

        let mut values = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            values.push(self.eval_operand(arg, &call.name)?);
        }

        let depth = self.env.depth();
        for (param, value) in decl.params.iter().zip(values) {
            self.env.define(param, value);
        }
        self.call_depth += 1;
        let result = self.exec_stmt(&decl.body);
        self.call_depth -= 1;
        self.env.truncate(depth);
        result.map(|()| None)
    }

    fn warn(&self, message: &str) {
        report_warning(&self.print, message);
    }

    /// The velocity/position block printed after every movement verb.
    fn report_state(&self) {
        let fmt = |value: f64| format_significant(value, self.precision);
        let player = &self.player;
        self.print.println(&format!(
            "Velocity: ({}, {})",
            fmt(player.velocity.x),
            fmt(player.velocity.y)
        ));
        self.print.println(&format!(
            "Position: ({}, {})",
            fmt(player.position.x),
            fmt(player.position.y)
        ));
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn eval_literal(literal: &Literal) -> Result<Value, EvalError> {
    let text = literal.text.as_str();
    match literal.kind {
        LiteralKind::Integer => text
            .parse()
            .map(Value::Int)
            .map_err(|_| invalid_literal(text)),
        LiteralKind::Float => text
            .parse()
            .map(Value::Float)
            .map_err(|_| invalid_literal(text)),
        LiteralKind::Boolean => Ok(Value::Bool(text == "true")),
        LiteralKind::String => Ok(Value::Str(text.to_owned())),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
