//! Syntax tree for the rill language.
//!
//! The tree is produced by an external parser and assumed structurally
//! well-formed; the backend performs semantic validation only. Nodes that
//! can raise a diagnostic carry the source position of their defining
//! token.

/// Source position of a token (1-based line, 0-based column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl Pos {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Arithmetic operators over numeric operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
    Xor,
}

impl LogicOp {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicOp::And => "and",
            LogicOp::Or => "or",
            LogicOp::Xor => "xor",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident { name: String, pos: Pos },
    /// Integer literal; typed `i32` by the grammar.
    Int { text: String, pos: Pos },
    /// Floating-point literal; typed `f64` by the grammar.
    Float { text: String, pos: Pos },
    Bool { value: bool, pos: Pos },
    Binary { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr>, pos: Pos },
    Logic { op: LogicOp, lhs: Box<Expr>, rhs: Box<Expr>, pos: Pos },
    Not { expr: Box<Expr>, pos: Pos },
    /// Struct field read: `base.field`.
    Field { base: String, field: String, pos: Pos },
}

impl Expr {
    pub fn pos(&self) -> Pos {
        match self {
            Expr::Ident { pos, .. }
            | Expr::Int { pos, .. }
            | Expr::Float { pos, .. }
            | Expr::Bool { pos, .. }
            | Expr::Binary { pos, .. }
            | Expr::Logic { pos, .. }
            | Expr::Not { pos, .. }
            | Expr::Field { pos, .. } => *pos,
        }
    }
}

/// One field of a struct declaration; declaration order defines layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: String,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `i32 x;`: primitive variable declaration. `ty` is the source type
    /// name, resolved by the backend.
    Decl { ty: String, name: String, pos: Pos },
    /// `struct S { i32 a; f64 b; }`: aggregate type declaration.
    StructDef { name: String, fields: Vec<FieldDecl>, pos: Pos },
    /// `S p;`: aggregate instance declaration.
    StructDecl { struct_name: String, name: String, pos: Pos },
    Assign { name: String, value: Expr, pos: Pos },
    FieldAssign { base: String, field: String, value: Expr, pos: Pos },
    /// `read x;`: formatted scan into a declared variable.
    Read { name: String, pos: Pos },
    /// `write <expr>;`
    WriteExpr { value: Expr, pos: Pos },
    /// `write "literal";`
    WriteStr { text: String, pos: Pos },
    /// `if <bool-expr> { ... }`: the language has no `else` branch.
    If { cond: Expr, body: Vec<Stmt>, pos: Pos },
    /// `loop <bound> { ... }`: counted when the bound is integer,
    /// condition-driven when it is boolean.
    Loop { bound: Expr, body: Vec<Stmt>, pos: Pos },
    /// `call f;`: invoke a previously defined procedure.
    Call { name: String, pos: Pos },
}

/// A flat, parameterless procedure. Functions cannot nest.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub body: Vec<Stmt>,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Stmt(Stmt),
    Function(Function),
}

/// A whole translation unit, in source order. Global-scope statements are
/// lowered into the program entry function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub items: Vec<Item>,
}
