//! Runtime values.

use std::fmt;

use crate::format::format_significant;

/// A runtime value.
///
/// Numbers keep the reference widths: 32-bit integers and 32-bit floats.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
        }
    }

    /// Numeric value widened to `f64`, or `None` for bools and strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(f64::from(*n)),
            Value::Float(f) => Some(f64::from(*f)),
            Value::Bool(_) | Value::Str(_) => None,
        }
    }

    /// Text as printed by scripts: strings without quotes, floats with
    /// `precision` significant digits.
    pub fn render(&self, precision: usize) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Float(f) => format_significant(f64::from(*f), precision),
            Value::Bool(b) => b.to_string(),
            Value::Str(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "\"{s}\""),
        }
    }
}
