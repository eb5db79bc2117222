//! Core type definitions for values flowing through the lowering core
//!
//! The emitted target language is C with manual memory management, so a
//! value's type is one of: a C scalar primitive, an owning pointer to a
//! class instance, or an owning raw allocation.

use crate::registry::{ClassId, ClassRegistry};
use std::fmt;

/// C scalar primitives understood by the lowering core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimType {
    /// The `bool` type (C `<stdbool.h>`)
    Bool,
    /// The `char` type
    Char,
    /// The `int` type
    Int,
    /// The `long` type
    Long,
    /// The `float` type
    Float,
    /// The `double` type
    Double,
    /// The `void` type (for routines with no return value)
    Void,
}

impl PrimType {
    /// The C spelling of this primitive.
    pub fn c_name(&self) -> &'static str {
        match self {
            PrimType::Bool => "bool",
            PrimType::Char => "char",
            PrimType::Int => "int",
            PrimType::Long => "long",
            PrimType::Float => "float",
            PrimType::Double => "double",
            PrimType::Void => "void",
        }
    }

    /// Widening rank. `Void` carries no value and has no rank.
    fn rank(self) -> Option<u8> {
        match self {
            PrimType::Bool => Some(0),
            PrimType::Char => Some(1),
            PrimType::Int => Some(2),
            PrimType::Long => Some(3),
            PrimType::Float => Some(4),
            PrimType::Double => Some(5),
            PrimType::Void => None,
        }
    }

    /// Check whether a value of this primitive implicitly widens to `other`.
    ///
    /// Widening is strict: a primitive never widens to itself, and nothing
    /// widens to or from `void`.
    pub fn widens_to(self, other: PrimType) -> bool {
        match (self.rank(), other.rank()) {
            (Some(from), Some(to)) => from < to,
            _ => false,
        }
    }
}

impl fmt::Display for PrimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// Semantic type of a value: primitive, owning class pointer, or owning
/// raw allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CType {
    /// A scalar primitive
    Prim(PrimType),
    /// An owning pointer to an instance of a registered class
    Class(ClassId),
    /// An owning raw allocation with an explicit C spelling (e.g. `char*`)
    Raw(String),
}

impl CType {
    /// Render this type as it appears in emitted C source.
    ///
    /// Class instances are always passed and stored by pointer, so a class
    /// type renders as `<Name>*`.
    pub fn c_name(&self, registry: &ClassRegistry) -> String {
        match self {
            CType::Prim(p) => p.c_name().to_string(),
            CType::Class(id) => format!("{}*", registry.get(*id).name),
            CType::Raw(spelling) => spelling.clone(),
        }
    }

    /// Whether the deconstructor has a release strategy for this type.
    ///
    /// Class fields release through the field class's own deconstructor,
    /// raw allocations through `free`. Primitives own nothing.
    pub fn is_releasable(&self) -> bool {
        !matches!(self, CType::Prim(_))
    }
}
