//! The closed set of semantic types.

/// Semantic type of a value or storage slot. Exactly one value exists per
/// source-syntax type name; `Struct` carries no fixed size, its layout is
/// defined per declared struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ty {
    I32,
    I64,
    F32,
    F64,
    Bool,
    Struct,
}

impl Ty {
    /// Resolve a source-syntax type name. `Struct` has no source name of
    /// its own; aggregate types are named by their declaration.
    pub fn from_name(name: &str) -> Option<Ty> {
        match name {
            "i32" => Some(Ty::I32),
            "i64" => Some(Ty::I64),
            "f32" => Some(Ty::F32),
            "f64" => Some(Ty::F64),
            "bool" => Some(Ty::Bool),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ty::I32 => "i32",
            Ty::I64 => "i64",
            Ty::F32 => "f32",
            Ty::F64 => "f64",
            Ty::Bool => "bool",
            Ty::Struct => "struct",
        }
    }

    /// LLVM type name used in instruction operands.
    pub fn llvm(self) -> &'static str {
        match self {
            Ty::I32 => "i32",
            Ty::I64 => "i64",
            Ty::F32 => "float",
            Ty::F64 => "double",
            Ty::Bool => "i1",
            Ty::Struct => "ptr",
        }
    }

    /// Storage size in bytes; also used as the alignment of loads, stores
    /// and allocas. Aggregates have no fixed size.
    pub fn size(self) -> usize {
        match self {
            Ty::I32 => 4,
            Ty::I64 => 8,
            Ty::F32 => 4,
            Ty::F64 => 8,
            Ty::Bool => 1,
            Ty::Struct => 0,
        }
    }

    /// Default value literal for a global slot of this type.
    pub fn zero(self) -> &'static str {
        match self {
            Ty::I32 | Ty::I64 | Ty::Bool => "0",
            Ty::F32 | Ty::F64 => "0.0",
            Ty::Struct => "zeroinitializer",
        }
    }

    /// printf/scanf conversion for values of this type. Booleans travel
    /// through the integer conversion.
    pub fn format(self) -> &'static str {
        match self {
            Ty::I32 | Ty::Bool => "%d",
            Ty::I64 => "%ld",
            Ty::F32 => "%f",
            Ty::F64 => "%lf",
            Ty::Struct => "%d",
        }
    }

    pub fn is_int(self) -> bool {
        matches!(self, Ty::I32 | Ty::I64)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Ty::F32 | Ty::F64)
    }

    pub fn is_bool(self) -> bool {
        matches!(self, Ty::Bool)
    }
}
