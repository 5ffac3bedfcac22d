//! Semantic analysis and LLVM IR text generation for rill.
//!
//! The backend walks the syntax tree once. Expression lowering is
//! post-order over an operand stack: children push their results, the
//! parent pops, coerces operand types where the language allows it and
//! pushes the combined value. Semantic errors are accumulated as
//! diagnostics rather than aborting the walk, so one pass reports every
//! problem in the unit; a unit with any diagnostic produces no document.

pub mod builder;
pub mod diag;
pub mod stack;
pub mod symbols;
pub mod types;

use anyhow::{anyhow, Result};
use syntax::{BinOp, Expr, FieldDecl, Function, Item, LogicOp, Pos, Program, Stmt};

use crate::builder::{IrBuilder, Operation};
use crate::diag::{Diagnostic, SemaError};
use crate::stack::StackValue;
use crate::symbols::{Scope, Storage, StructDef, SymbolTable, Variable};
use crate::types::Ty;

/// Lower `program` to LLVM IR text, or the full ordered diagnostic list
/// if any statement fails semantic validation.
pub fn lower_program(program: &Program) -> std::result::Result<String, Vec<Diagnostic>> {
    let mut lowering = Lowering::new(program);
    for item in &program.items {
        match item {
            Item::Stmt(stmt) => lowering.lower_stmt(stmt),
            Item::Function(func) => lowering.lower_function(func),
        }
    }
    lowering.finish()
}

/// Convenience wrapper for callers that want a single error value:
/// diagnostics are rendered one per line.
pub fn emit_llvm_ir(program: &Program) -> Result<String> {
    lower_program(program).map_err(|diags| {
        let lines: Vec<String> = diags.iter().map(|d| d.to_string()).collect();
        anyhow!("{}", lines.join("\n"))
    })
}

struct Lowering {
    builder: IrBuilder,
    symbols: SymbolTable,
    /// Innermost scope last; `Scope::Global` always at the bottom.
    scopes: Vec<Scope>,
    diags: Vec<Diagnostic>,
    /// Global-scope declarations become module slots (`@name`) instead of
    /// entry-function allocas when the unit defines procedures, since a
    /// procedure body cannot reach another frame's stack slot.
    module_globals: bool,
}

impl Lowering {
    fn new(program: &Program) -> Self {
        let has_functions = program
            .items
            .iter()
            .any(|item| matches!(item, Item::Function(_)));
        Self {
            builder: IrBuilder::new(),
            symbols: SymbolTable::new(),
            scopes: vec![Scope::Global],
            diags: Vec::new(),
            module_globals: has_functions,
        }
    }

    fn scope(&self) -> Scope {
        self.scopes.last().cloned().unwrap_or(Scope::Global)
    }

    fn error(&mut self, error: SemaError, pos: Pos) {
        self.diags.push(Diagnostic::new(error, pos));
    }

    fn finish(self) -> std::result::Result<String, Vec<Diagnostic>> {
        if self.diags.is_empty() {
            Ok(self.builder.build())
        } else {
            Err(self.diags)
        }
    }

    fn lower_function(&mut self, func: &Function) {
        if let Err(e) = self.symbols.declare_function(&func.name) {
            self.error(e, func.pos);
            return;
        }
        self.scopes.push(Scope::Function(func.name.clone()));
        self.builder.begin_function(&func.name);
        for stmt in &func.body {
            self.lower_stmt(stmt);
        }
        self.builder.end_function();
        self.scopes.pop();
    }

    fn lower_body(&mut self, body: &[Stmt]) {
        for stmt in body {
            self.lower_stmt(stmt);
        }
    }

    fn lower_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Decl { ty, name, pos } => match Ty::from_name(ty) {
                Some(ty) => self.declare_variable(name, ty, *pos),
                None => self.error(SemaError::UnknownType(ty.clone()), *pos),
            },
            Stmt::StructDef { name, fields, pos } => self.lower_struct_def(name, fields, *pos),
            Stmt::StructDecl {
                struct_name,
                name,
                pos,
            } => self.lower_struct_decl(struct_name, name, *pos),
            Stmt::Assign { name, value, pos } => self.lower_assign(name, value, *pos),
            Stmt::FieldAssign {
                base,
                field,
                value,
                pos,
            } => self.lower_field_assign(base, field, value, *pos),
            Stmt::Read { name, pos } => self.lower_read(name, *pos),
            Stmt::WriteExpr { value, .. } => {
                self.lower_expr(value);
                self.write_value();
            }
            Stmt::WriteStr { text, .. } => {
                self.builder.mark(Operation::Write);
                let fmt = self.builder.intern_string(text);
                self.builder
                    .emit(&format!("call i32 (ptr, ...) @printf(ptr noundef {})", fmt));
            }
            Stmt::If { cond, body, .. } => self.lower_if(cond, body),
            Stmt::Loop { bound, body, pos } => self.lower_loop(bound, body, *pos),
            Stmt::Call { name, pos } => {
                if self.symbols.has_function(name) {
                    self.builder.emit_void(&format!("call void @{}()", name));
                } else {
                    self.error(SemaError::UndeclaredIdentifier(name.clone()), *pos);
                }
            }
        }
    }

    /// `i32 x;` and friends. At global scope with procedures present the
    /// slot is a zero-initialized module global; everywhere else an alloca
    /// in the active stream.
    fn declare_variable(&mut self, name: &str, ty: Ty, pos: Pos) {
        let scope = self.scope();
        if self.symbols.is_bound(name, &scope) {
            self.error(SemaError::Redefinition(name.to_string()), pos);
            return;
        }
        let storage = if scope == Scope::Global && self.module_globals {
            self.builder
                .push_header(format!("@{} = global {} {}", name, ty.llvm(), ty.zero()));
            Storage::Global(name.to_string())
        } else {
            let id = self
                .builder
                .emit(&format!("alloca {}, align {}", ty.llvm(), ty.size()));
            Storage::Slot(id)
        };
        let _ = self
            .symbols
            .declare_variable(name, Variable { storage, ty, scope });
    }

    fn lower_struct_def(&mut self, name: &str, fields: &[FieldDecl], pos: Pos) {
        let scope = self.scope();
        let mut tys = Vec::new();
        for field in fields {
            match Ty::from_name(&field.ty) {
                Some(ty) if ty != Ty::Struct => tys.push((field.name.clone(), ty)),
                _ => {
                    self.error(SemaError::UnknownType(field.ty.clone()), field.pos);
                    return;
                }
            }
        }
        let def = StructDef {
            name: name.to_string(),
            scope,
            fields: tys,
        };
        let body = def
            .fields
            .iter()
            .map(|(_, ty)| ty.llvm())
            .collect::<Vec<_>>()
            .join(", ");
        let line = if body.is_empty() {
            format!("{} = type {{}}", def.llvm_name())
        } else {
            format!("{} = type {{ {} }}", def.llvm_name(), body)
        };
        match self.symbols.declare_struct(def) {
            Ok(()) => self.builder.push_header(line),
            Err(e) => self.error(e, pos),
        }
    }

    fn lower_struct_decl(&mut self, struct_name: &str, name: &str, pos: Pos) {
        let scope = self.scope();
        let def = match self.symbols.resolve_struct(struct_name, &scope) {
            Ok(def) => def.clone(),
            Err(e) => {
                self.error(e, pos);
                return;
            }
        };
        if self.symbols.is_bound(name, &scope) {
            self.error(SemaError::Redefinition(name.to_string()), pos);
            return;
        }
        let storage = if scope == Scope::Global {
            self.builder.push_header(format!(
                "@{} = global {} zeroinitializer",
                name,
                def.llvm_name()
            ));
            Storage::Global(name.to_string())
        } else {
            let align = def.fields.iter().map(|(_, ty)| ty.size()).max().unwrap_or(1);
            let id = self
                .builder
                .emit(&format!("alloca {}, align {}", def.llvm_name(), align));
            Storage::Slot(id)
        };
        let _ = self.symbols.declare_variable(
            name,
            Variable {
                storage,
                ty: Ty::Struct,
                scope: scope.clone(),
            },
        );
        self.symbols.bind_instance(name, &scope, &def.name);
    }

    fn lower_assign(&mut self, name: &str, value: &Expr, pos: Pos) {
        self.lower_expr(value);
        let Some(val) = self.builder.stack.pop() else {
            return;
        };
        let scope = self.scope();
        let Some(var) = self.symbols.lookup_variable(name, &scope).cloned() else {
            self.error(SemaError::UndeclaredIdentifier(name.to_string()), pos);
            return;
        };
        if var.ty == Ty::Struct {
            self.error(SemaError::AggregateNotAValue(name.to_string()), pos);
            return;
        }
        self.store_coerced(val, var.ty, &var.storage.operand(), pos);
    }

    fn lower_field_assign(&mut self, base: &str, field: &str, value: &Expr, pos: Pos) {
        self.lower_expr(value);
        let Some(val) = self.builder.stack.pop() else {
            return;
        };
        let Some((gep, field_ty)) = self.struct_field_ptr(base, field, pos) else {
            return;
        };
        self.store_coerced(val, field_ty, &format!("%{}", gep), pos);
    }

    /// Store a value into a typed slot, converting it to the slot type.
    /// Assignment admits the same type classes as arithmetic coercion:
    /// numeric into numeric, boolean into boolean.
    fn store_coerced(&mut self, val: StackValue, target: Ty, ptr: &str, pos: Pos) {
        let numeric =
            (target.is_int() || target.is_float()) && (val.ty().is_int() || val.ty().is_float());
        if !(numeric || (target.is_bool() && val.ty().is_bool())) {
            self.error(
                SemaError::MatchingOperatorNotFound {
                    op: "=".to_string(),
                    first: target.name(),
                    second: val.ty().name(),
                },
                pos,
            );
            return;
        }
        let val = self.cast_to(val, target);
        self.builder.emit_void(&format!(
            "store {} {}, ptr {}, align {}",
            target.llvm(),
            val.operand(),
            ptr,
            target.size()
        ));
    }

    fn lower_read(&mut self, name: &str, pos: Pos) {
        let scope = self.scope();
        let Some(var) = self.symbols.lookup_variable(name, &scope).cloned() else {
            self.error(SemaError::UndeclaredIdentifier(name.to_string()), pos);
            return;
        };
        if var.ty == Ty::Struct {
            self.error(SemaError::AggregateNotAValue(name.to_string()), pos);
            return;
        }
        self.builder.mark(Operation::Read);
        let fmt = self.builder.intern_string(var.ty.format());
        self.builder.emit(&format!(
            "call i32 (ptr, ...) @scanf(ptr noundef {}, ptr noundef {})",
            fmt,
            var.storage.operand()
        ));
    }

    /// Print the value on top of the operand stack. The format string is
    /// chosen from the static type; an `f32` value is widened to `double`
    /// first, as the variadic call promotes it anyway.
    fn write_value(&mut self) {
        let Some(val) = self.builder.stack.pop() else {
            return;
        };
        let fmt = val.ty().format();
        let val = if val.ty() == Ty::F32 {
            self.cast_to(val, Ty::F64)
        } else {
            val
        };
        self.builder.mark(Operation::Write);
        let fmt = self.builder.intern_string(fmt);
        self.builder.emit(&format!(
            "call i32 (ptr, ...) @printf(ptr noundef {}, {} noundef {})",
            fmt,
            val.ty().llvm(),
            val.operand()
        ));
    }

    fn lower_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Int { text, .. } => self.builder.stack.push(StackValue::Const {
                ty: Ty::I32,
                text: text.clone(),
            }),
            Expr::Float { text, .. } => self.builder.stack.push(StackValue::Const {
                ty: Ty::F64,
                text: text.clone(),
            }),
            Expr::Bool { value, .. } => self.builder.stack.push(StackValue::Const {
                ty: Ty::Bool,
                text: if *value { "true".into() } else { "false".into() },
            }),
            Expr::Ident { name, pos } => {
                let scope = self.scope();
                match self.symbols.lookup_variable(name, &scope).cloned() {
                    None => self.error(SemaError::UndeclaredIdentifier(name.clone()), *pos),
                    Some(var) if var.ty == Ty::Struct => {
                        self.error(SemaError::AggregateNotAValue(name.clone()), *pos)
                    }
                    Some(var) => {
                        let id = self.builder.emit(&format!(
                            "load {}, ptr {}, align {}",
                            var.ty.llvm(),
                            var.storage.operand(),
                            var.ty.size()
                        ));
                        self.builder.stack.push(StackValue::Reg { id, ty: var.ty });
                    }
                }
            }
            Expr::Binary { op, lhs, rhs, pos } => {
                self.lower_expr(lhs);
                self.lower_expr(rhs);
                self.lower_arith(*op, *pos);
            }
            Expr::Logic { op, lhs, rhs, pos } => {
                self.lower_expr(lhs);
                self.lower_expr(rhs);
                self.lower_logic(*op, *pos);
            }
            Expr::Not { expr, pos } => {
                self.lower_expr(expr);
                let Some(val) = self.builder.stack.pop() else {
                    return;
                };
                if !val.ty().is_bool() {
                    self.error(
                        SemaError::NonBooleanOperand {
                            op: "not".to_string(),
                            operand: val.ty().name(),
                        },
                        *pos,
                    );
                    return;
                }
                let id = self
                    .builder
                    .emit(&format!("xor i1 {}, true", val.operand()));
                self.builder.stack.push(StackValue::Reg { id, ty: Ty::Bool });
            }
            Expr::Field { base, field, pos } => {
                let Some((gep, field_ty)) = self.struct_field_ptr(base, field, *pos) else {
                    return;
                };
                let id = self.builder.emit(&format!(
                    "load {}, ptr %{}, align {}",
                    field_ty.llvm(),
                    gep,
                    field_ty.size()
                ));
                self.builder.stack.push(StackValue::Reg { id, ty: field_ty });
            }
        }
    }

    fn lower_arith(&mut self, op: BinOp, pos: Pos) {
        let Some(second) = self.builder.stack.pop() else {
            return;
        };
        let Some(first) = self.builder.stack.pop() else {
            return;
        };
        let Some((first, second)) = self.coerce_pair(first, second, op, pos) else {
            return;
        };
        let ty = first.ty();
        let mnemonic = match (op, ty.is_float()) {
            (BinOp::Add, false) => "add nsw",
            (BinOp::Sub, false) => "sub nsw",
            (BinOp::Mul, false) => "mul nsw",
            (BinOp::Div, false) => "sdiv",
            (BinOp::Add, true) => "fadd",
            (BinOp::Sub, true) => "fsub",
            (BinOp::Mul, true) => "fmul",
            (BinOp::Div, true) => "fdiv",
        };
        let id = self.builder.emit(&format!(
            "{} {} {}, {}",
            mnemonic,
            ty.llvm(),
            first.operand(),
            second.operand()
        ));
        self.builder.stack.push(StackValue::Reg { id, ty });
    }

    /// Bring two arithmetic operands to a common type: within a class the
    /// narrower side widens, across int/float the integer converts to the
    /// float's type. Boolean operands have no arithmetic coercion.
    fn coerce_pair(
        &mut self,
        first: StackValue,
        second: StackValue,
        op: BinOp,
        pos: Pos,
    ) -> Option<(StackValue, StackValue)> {
        let (a, b) = (first.ty(), second.ty());
        if (a.is_int() && b.is_int()) || (a.is_float() && b.is_float()) {
            if a == b {
                Some((first, second))
            } else if a.size() < b.size() {
                let first = self.cast_to(first, b);
                Some((first, second))
            } else {
                let second = self.cast_to(second, a);
                Some((first, second))
            }
        } else if a.is_int() && b.is_float() {
            let first = self.cast_to(first, b);
            Some((first, second))
        } else if a.is_float() && b.is_int() {
            let second = self.cast_to(second, a);
            Some((first, second))
        } else {
            self.error(
                SemaError::MatchingOperatorNotFound {
                    op: op.symbol().to_string(),
                    first: a.name(),
                    second: b.name(),
                },
                pos,
            );
            None
        }
    }

    /// Emit the conversion instruction from the value's type to `target`
    /// and return the converted value. Same-type conversion is a no-op.
    /// Boolean conversions have no callers and are a backend bug.
    fn cast_to(&mut self, val: StackValue, target: Ty) -> StackValue {
        let from = val.ty();
        if from == target {
            return val;
        }
        let inst = if from.is_int() && target.is_int() {
            if target.size() > from.size() {
                "sext"
            } else {
                "trunc"
            }
        } else if from.is_float() && target.is_float() {
            if target.size() > from.size() {
                "fpext"
            } else {
                "fptrunc"
            }
        } else if from.is_int() && target.is_float() {
            "sitofp"
        } else if from.is_float() && target.is_int() {
            "fptosi"
        } else {
            unreachable!("no conversion from {} to {}", from.name(), target.name())
        };
        let id = self.builder.emit(&format!(
            "{} {} {} to {}",
            inst,
            from.llvm(),
            val.operand(),
            target.llvm()
        ));
        StackValue::Reg { id, ty: target }
    }

    fn lower_logic(&mut self, op: LogicOp, pos: Pos) {
        let Some(second) = self.builder.stack.pop() else {
            return;
        };
        let Some(first) = self.builder.stack.pop() else {
            return;
        };
        for val in [&first, &second] {
            if !val.ty().is_bool() {
                self.error(
                    SemaError::NonBooleanOperand {
                        op: op.symbol().to_string(),
                        operand: val.ty().name(),
                    },
                    pos,
                );
                return;
            }
        }
        let mnemonic = match op {
            LogicOp::And => "and",
            LogicOp::Or => "or",
            LogicOp::Xor => "xor",
        };
        let id = self.builder.emit(&format!(
            "{} i1 {}, {}",
            mnemonic,
            first.operand(),
            second.operand()
        ));
        self.builder.stack.push(StackValue::Reg { id, ty: Ty::Bool });
    }

    /// `if` lowers to a conditional branch over a single taken block. A
    /// non-boolean or missing condition is reported (when typed) and the
    /// body still lowers, unguarded, so its own errors surface too.
    fn lower_if(&mut self, cond: &Expr, body: &[Stmt]) {
        self.lower_expr(cond);
        match self.builder.stack.pop() {
            Some(val) if val.ty().is_bool() => {
                let n = self.builder.new_label();
                self.builder.emit_void(&format!(
                    "br i1 {}, label %true{}, label %false{}",
                    val.operand(),
                    n,
                    n
                ));
                self.builder.emit_void(&format!("true{}:", n));
                self.builder.open_label(n);
                self.lower_body(body);
                if let Some(n) = self.builder.close_label() {
                    self.builder.emit_void(&format!("br label %false{}", n));
                    self.builder.emit_void(&format!("false{}:", n));
                }
            }
            Some(val) => {
                self.error(SemaError::NonBooleanCondition(val.ty().name()), cond.pos());
                self.lower_body(body);
            }
            None => self.lower_body(body),
        }
    }

    /// `loop` comes in two shapes keyed on the bound's static type.
    ///
    /// Integer bound: a hidden counter slot counts from zero; each
    /// iteration reloads it, increments, and compares the pre-increment
    /// value against the bound with `icmp slt`.
    ///
    /// Boolean bound: the condition expression is re-lowered inside the
    /// `cond` block so every iteration re-evaluates it.
    fn lower_loop(&mut self, bound: &Expr, body: &[Stmt], pos: Pos) {
        match self.static_ty(bound) {
            Some(ty) if ty.is_int() => {
                self.lower_expr(bound);
                let Some(limit) = self.builder.stack.pop() else {
                    self.lower_body(body);
                    return;
                };
                let ty = limit.ty();
                let n = self.builder.new_label();
                let slot = self
                    .builder
                    .emit(&format!("alloca {}, align {}", ty.llvm(), ty.size()));
                self.builder.emit_void(&format!(
                    "store {} 0, ptr %{}, align {}",
                    ty.llvm(),
                    slot,
                    ty.size()
                ));
                self.builder.emit_void(&format!("br label %cond{}", n));
                self.builder.emit_void(&format!("cond{}:", n));
                let cur = self.builder.emit(&format!(
                    "load {}, ptr %{}, align {}",
                    ty.llvm(),
                    slot,
                    ty.size()
                ));
                let next = self
                    .builder
                    .emit(&format!("add nsw {} %{}, 1", ty.llvm(), cur));
                self.builder.emit_void(&format!(
                    "store {} %{}, ptr %{}, align {}",
                    ty.llvm(),
                    next,
                    slot,
                    ty.size()
                ));
                let cmp = self.builder.emit(&format!(
                    "icmp slt {} %{}, {}",
                    ty.llvm(),
                    cur,
                    limit.operand()
                ));
                self.builder.emit_void(&format!(
                    "br i1 %{}, label %true{}, label %false{}",
                    cmp, n, n
                ));
                self.builder.emit_void(&format!("true{}:", n));
                self.builder.open_label(n);
                self.lower_body(body);
                if let Some(n) = self.builder.close_label() {
                    self.builder.emit_void(&format!("br label %cond{}", n));
                    self.builder.emit_void(&format!("false{}:", n));
                }
            }
            Some(Ty::Bool) => {
                let n = self.builder.new_label();
                self.builder.emit_void(&format!("br label %cond{}", n));
                self.builder.emit_void(&format!("cond{}:", n));
                self.lower_expr(bound);
                match self.builder.stack.pop() {
                    Some(val) => self.builder.emit_void(&format!(
                        "br i1 {}, label %true{}, label %false{}",
                        val.operand(),
                        n,
                        n
                    )),
                    None => self.builder.emit_void(&format!("br label %false{}", n)),
                }
                self.builder.emit_void(&format!("true{}:", n));
                self.builder.open_label(n);
                self.lower_body(body);
                if let Some(n) = self.builder.close_label() {
                    self.builder.emit_void(&format!("br label %cond{}", n));
                    self.builder.emit_void(&format!("false{}:", n));
                }
            }
            Some(other) => {
                self.error(SemaError::UnsupportedLoopBound(other.name()), pos);
                self.lower_body(body);
            }
            None => {
                // Let the bound expression report its own error.
                self.lower_expr(bound);
                let _ = self.builder.stack.pop();
                self.lower_body(body);
            }
        }
    }

    /// Compute an expression's type without emitting anything. `None`
    /// means the expression is itself in error (undeclared name, bad
    /// operand mix) and lowering it will record the diagnostic.
    fn static_ty(&self, expr: &Expr) -> Option<Ty> {
        match expr {
            Expr::Int { .. } => Some(Ty::I32),
            Expr::Float { .. } => Some(Ty::F64),
            Expr::Bool { .. } => Some(Ty::Bool),
            Expr::Ident { name, .. } => self
                .symbols
                .lookup_variable(name, &self.scope())
                .map(|v| v.ty),
            Expr::Binary { lhs, rhs, .. } => {
                let a = self.static_ty(lhs)?;
                let b = self.static_ty(rhs)?;
                arith_result(a, b)
            }
            Expr::Logic { .. } | Expr::Not { .. } => Some(Ty::Bool),
            Expr::Field { base, field, .. } => {
                let scope = self.scope();
                let struct_name = self.symbols.lookup_instance(base, &scope)?;
                let def = self.symbols.resolve_struct(struct_name, &scope).ok()?;
                def.field(field).map(|(_, ty)| ty)
            }
        }
    }

    /// Resolve `base.field` to an element pointer: instance, then its
    /// struct definition, then the field index. Every failure is recorded
    /// and stops the access.
    fn struct_field_ptr(&mut self, base: &str, field: &str, pos: Pos) -> Option<(usize, Ty)> {
        let scope = self.scope();
        let Some(struct_name) = self
            .symbols
            .lookup_instance(base, &scope)
            .map(str::to_string)
        else {
            self.error(SemaError::UndeclaredIdentifier(base.to_string()), pos);
            return None;
        };
        let def = match self.symbols.resolve_struct(&struct_name, &scope) {
            Ok(def) => def.clone(),
            Err(e) => {
                self.error(e, pos);
                return None;
            }
        };
        let Some((index, field_ty)) = def.field(field) else {
            self.error(
                SemaError::UnknownField {
                    strukt: def.name.clone(),
                    field: field.to_string(),
                },
                pos,
            );
            return None;
        };
        let Some(var) = self.symbols.lookup_variable(base, &scope).cloned() else {
            self.error(SemaError::UndeclaredIdentifier(base.to_string()), pos);
            return None;
        };
        let gep = self.builder.emit(&format!(
            "getelementptr inbounds {}, ptr {}, i32 0, i32 {}",
            def.llvm_name(),
            var.storage.operand(),
            index
        ));
        Some((gep, field_ty))
    }
}

/// The type an arithmetic combination of `a` and `b` would produce, or
/// `None` when the pair has no common arithmetic type.
fn arith_result(a: Ty, b: Ty) -> Option<Ty> {
    if (a.is_int() && b.is_int()) || (a.is_float() && b.is_float()) {
        Some(if a.size() >= b.size() { a } else { b })
    } else if a.is_int() && b.is_float() {
        Some(b)
    } else if a.is_float() && b.is_int() {
        Some(a)
    } else {
        None
    }
}
