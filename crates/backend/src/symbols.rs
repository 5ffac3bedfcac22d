//! Scoped symbol table for variables, struct types and procedures.
//!
//! Bindings are keyed by (name, scope). Lookup tries the current scope
//! first and falls back to the global scope, which realizes "globals
//! visible everywhere, locals shadow globals of the same name".

use std::collections::{HashMap, HashSet};

use crate::diag::SemaError;
use crate::types::Ty;

/// Declaration-visibility region: the one global region or the single
/// active function region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Function(String),
}

/// Where a declared variable lives in the emitted IR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    /// Stack slot: the result id of its `alloca`.
    Slot(usize),
    /// Module-level slot declared in the header section.
    Global(String),
}

impl Storage {
    /// Rendering in pointer-operand position.
    pub fn operand(&self) -> String {
        match self {
            Storage::Slot(id) => format!("%{}", id),
            Storage::Global(name) => format!("@{}", name),
        }
    }
}

/// A declared variable; created once at declaration, immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub storage: Storage,
    pub ty: Ty,
    pub scope: Scope,
}

/// A declared aggregate type. Field order defines the layout; the field
/// index used for addressing is the position in the declaration list, and
/// lookup returns the first match when a name repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub name: String,
    pub scope: Scope,
    pub fields: Vec<(String, Ty)>,
}

impl StructDef {
    pub fn field(&self, name: &str) -> Option<(usize, Ty)> {
        self.fields
            .iter()
            .position(|(f, _)| f == name)
            .map(|i| (i, self.fields[i].1))
    }

    /// LLVM named-type reference, e.g. `%struct.Point`.
    pub fn llvm_name(&self) -> String {
        format!("%struct.{}", self.name)
    }
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    vars: HashMap<(String, Scope), Variable>,
    structs: HashMap<(String, Scope), StructDef>,
    /// Instance name -> struct type name, per scope.
    instances: HashMap<(String, Scope), String>,
    functions: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_variable(
        &mut self,
        name: &str,
        var: Variable,
    ) -> Result<(), SemaError> {
        let key = (name.to_string(), var.scope.clone());
        if self.vars.contains_key(&key) {
            return Err(SemaError::Redefinition(name.to_string()));
        }
        self.vars.insert(key, var);
        Ok(())
    }

    /// True when `name` is already taken in exactly `scope` (no fallback).
    pub fn is_bound(&self, name: &str, scope: &Scope) -> bool {
        self.vars.contains_key(&(name.to_string(), scope.clone()))
    }

    /// Current scope first, then the global scope.
    pub fn lookup_variable(&self, name: &str, scope: &Scope) -> Option<&Variable> {
        self.vars
            .get(&(name.to_string(), scope.clone()))
            .or_else(|| self.vars.get(&(name.to_string(), Scope::Global)))
    }

    pub fn declare_struct(&mut self, def: StructDef) -> Result<(), SemaError> {
        let key = (def.name.clone(), def.scope.clone());
        if self.structs.contains_key(&key) || self.instances.contains_key(&key) {
            return Err(SemaError::Redefinition(def.name.clone()));
        }
        self.structs.insert(key, def);
        Ok(())
    }

    /// Resolve a struct type for use from `scope`. A definition in the
    /// current scope or the global scope is visible; one that only exists
    /// in a different function scope is out of scope.
    pub fn resolve_struct(&self, name: &str, scope: &Scope) -> Result<&StructDef, SemaError> {
        if let Some(def) = self
            .structs
            .get(&(name.to_string(), scope.clone()))
            .or_else(|| self.structs.get(&(name.to_string(), Scope::Global)))
        {
            return Ok(def);
        }
        if self.structs.keys().any(|(n, _)| n == name) {
            Err(SemaError::StructOutOfScope(name.to_string()))
        } else {
            Err(SemaError::UndeclaredStructType(name.to_string()))
        }
    }

    pub fn bind_instance(&mut self, name: &str, scope: &Scope, struct_name: &str) {
        self.instances
            .insert((name.to_string(), scope.clone()), struct_name.to_string());
    }

    pub fn lookup_instance(&self, name: &str, scope: &Scope) -> Option<&str> {
        self.instances
            .get(&(name.to_string(), scope.clone()))
            .or_else(|| self.instances.get(&(name.to_string(), Scope::Global)))
            .map(String::as_str)
    }

    pub fn declare_function(&mut self, name: &str) -> Result<(), SemaError> {
        if !self.functions.insert(name.to_string()) {
            return Err(SemaError::Redefinition(name.to_string()));
        }
        Ok(())
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }
}
