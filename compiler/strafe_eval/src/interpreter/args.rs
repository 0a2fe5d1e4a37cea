//! Typed access to evaluated call arguments.
//!
//! Builtins and verbs treat a bad argument as absent: a missing value or a
//! value of the wrong type is reported as a warning and the accessor
//! returns `None`, leaving the caller to fall back to its default.

use tracing::warn;

use crate::{PrintHandlerImpl, SharedPrintHandler, Value};

/// Log a soft warning and echo it on the diagnostic stream.
pub(super) fn report_warning(print: &PrintHandlerImpl, message: &str) {
    warn!("{message}");
    print.diagnostic(&format!("warning: {message}"));
}

pub(super) struct CallArgs<'c> {
    name: &'c str,
    values: Vec<Option<Value>>,
    print: SharedPrintHandler,
}

impl<'c> CallArgs<'c> {
    pub(super) fn new(name: &'c str, values: Vec<Option<Value>>, print: SharedPrintHandler) -> Self {
        CallArgs {
            name,
            values,
            print,
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn is_absent(&self, index: usize) -> bool {
        index >= self.values.len()
    }

    /// The argument at `index`, if it was given and has a value.
    fn get(&self, index: usize) -> Option<&Value> {
        match self.values.get(index)? {
            Some(value) => Some(value),
            None => {
                self.warn(&format!(
                    "argument {} of `{}` not recognized",
                    index + 1,
                    self.name
                ));
                None
            }
        }
    }

    /// Every argument that has a value, in order.
    pub(super) fn present(&self) -> impl Iterator<Item = &Value> + '_ {
        (0..self.values.len()).filter_map(|index| self.get(index))
    }

    /// A numeric argument, keeping its int or float kind.
    pub(super) fn number(&self, index: usize) -> Option<&Value> {
        let value = self.get(index)?;
        if value.as_f64().is_some() {
            Some(value)
        } else {
            self.expected("a number", value);
            None
        }
    }

    /// A numeric argument as an int; floats are truncated.
    pub(super) fn int(&self, index: usize) -> Option<i32> {
        match self.number(index)? {
            Value::Int(n) => Some(*n),
            Value::Float(f) => Some(*f as i32),
            Value::Bool(_) | Value::Str(_) => None,
        }
    }

    pub(super) fn float(&self, index: usize) -> Option<f32> {
        match self.number(index)? {
            Value::Int(n) => Some(*n as f32),
            Value::Float(f) => Some(*f),
            Value::Bool(_) | Value::Str(_) => None,
        }
    }

    /// `default` when the argument was not given; `None` when it was given
    /// but is unusable.
    pub(super) fn float_or(&self, index: usize, default: f32) -> Option<f32> {
        if self.is_absent(index) {
            Some(default)
        } else {
            self.float(index)
        }
    }

    pub(super) fn flag_or(&self, index: usize, default: bool) -> Option<bool> {
        if self.is_absent(index) {
            return Some(default);
        }
        match self.get(index)? {
            Value::Bool(b) => Some(*b),
            other => {
                self.expected("a bool", other);
                None
            }
        }
    }

    fn expected(&self, what: &str, got: &Value) {
        self.warn(&format!(
            "`{}` expected {what}, got {}",
            self.name,
            got.type_name()
        ));
    }

    fn warn(&self, message: &str) {
        report_warning(&self.print, message);
    }
}
