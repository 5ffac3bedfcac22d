//! Typed operand stack used to lower expressions.

use crate::types::Ty;

/// A value sitting on the operand stack: either a materialized register or
/// an immediate literal. Both know their type and how to render themselves
/// in instruction operand position.
#[derive(Debug, Clone, PartialEq)]
pub enum StackValue {
    Reg { id: usize, ty: Ty },
    Const { ty: Ty, text: String },
}

impl StackValue {
    pub fn ty(&self) -> Ty {
        match self {
            StackValue::Reg { ty, .. } | StackValue::Const { ty, .. } => *ty,
        }
    }

    /// Rendering in operand position: `%<id>` for registers, the literal
    /// text for constants.
    pub fn operand(&self) -> String {
        match self {
            StackValue::Reg { id, .. } => format!("%{}", id),
            StackValue::Const { text, .. } => text.clone(),
        }
    }
}

/// LIFO of expression results. Every literal or computed sub-expression
/// pushes one value; operators pop their operand count. Popping empty is a
/// lenient degradation path for trees that already produced a diagnostic:
/// the caller skips the emission that depended on the value.
#[derive(Debug, Default)]
pub struct OperandStack {
    values: Vec<StackValue>,
}

impl OperandStack {
    pub fn push(&mut self, v: StackValue) {
        self.values.push(v);
    }

    pub fn pop(&mut self) -> Option<StackValue> {
        self.values.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
