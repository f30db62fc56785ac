//! Gate parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A gate parameter: either a concrete angle or a named variational symbol.
///
/// In JSON a parameter is a bare number (`0.5`) or a bare string (`"theta"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    /// A concrete value in radians.
    Value(f64),
    /// A symbolic parameter, bound later by the caller.
    Symbol(String),
}

impl Parameter {
    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        Parameter::Symbol(name.into())
    }

    /// Check if this parameter is symbolic.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, Parameter::Symbol(_))
    }

    /// The concrete value, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Parameter::Value(v) => Some(*v),
            Parameter::Symbol(_) => None,
        }
    }

    /// Negate the parameter.
    ///
    /// Symbols are negated by toggling a leading `-`, so negating twice gives
    /// back the original symbol.
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Parameter::Value(v) => Parameter::Value(-v),
            Parameter::Symbol(name) => match name.strip_prefix('-') {
                Some(rest) => Parameter::Symbol(rest.to_string()),
                None => Parameter::Symbol(format!("-{name}")),
            },
        }
    }
}

impl From<f64> for Parameter {
    fn from(v: f64) -> Self {
        Parameter::Value(v)
    }
}

impl From<&str> for Parameter {
    fn from(name: &str) -> Self {
        Parameter::Symbol(name.to_string())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Value(v) => write!(f, "{v}"),
            Parameter::Symbol(name) => write!(f, "{name}"),
        }
    }
}
