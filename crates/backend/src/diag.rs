//! Semantic diagnostics.
//!
//! Validation failures are recorded with their source position and
//! accumulated in order; they never unwind the walk. Only final document
//! assembly turns a non-empty list into a hard failure.

use std::fmt;

use syntax::Pos;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemaError {
    #[error("use of undeclared identifier '{0}'")]
    UndeclaredIdentifier(String),

    #[error("redefinition of '{0}'")]
    Redefinition(String),

    #[error("Operator '{op}' is not supported between operands of types '{first}' and '{second}'")]
    MatchingOperatorNotFound {
        op: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Operator '{op}' is not supported for operand of type '{operand}'")]
    NonBooleanOperand { op: String, operand: &'static str },

    #[error("unknown type name '{0}'")]
    UnknownType(String),

    #[error("use of undeclared struct type '{0}'")]
    UndeclaredStructType(String),

    #[error("struct type '{0}' used out of scope")]
    StructOutOfScope(String),

    #[error("no field named '{field}' in struct '{strukt}'")]
    UnknownField { strukt: String, field: String },

    #[error("struct instance '{0}' cannot be used as a value")]
    AggregateNotAValue(String),

    #[error("condition of type '{0}' is not boolean")]
    NonBooleanCondition(&'static str),

    #[error("loop bound of type '{0}' is not supported")]
    UnsupportedLoopBound(&'static str),
}

/// A recorded semantic error, localized to the token that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub error: SemaError,
    pub pos: Pos,
}

impl Diagnostic {
    pub fn new(error: SemaError, pos: Pos) -> Self {
        Self { error, pos }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}:{} {}", self.pos.line, self.pos.col, self.error)
    }
}
