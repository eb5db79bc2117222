//! Garnet Language Engine
//!
//! Class-lowering and C code-generation core of the Garnet compiler:
//! - **Class model**: fields, flattened inherited layout, constructors,
//!   methods, typed variants, conversion routines (`class`, `function`,
//!   `typed`, `convert` modules)
//! - **Registry**: arena of classes with checked registration and
//!   inheritance traversal (`registry` module)
//! - **Resolution**: overload resolution with implicit conversions and
//!   ancestor fallback (`resolve` module)
//! - **Emission**: deterministic C source output (`emit` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use garnet_engine::{ClassRegistry, CEmitter, FieldDef, CType, PrimType};
//!
//! let mut registry = ClassRegistry::new();
//! let point = registry.register(
//!     "Point",
//!     vec![
//!         FieldDef::new("x", CType::Prim(PrimType::Int), false),
//!         FieldDef::new("y", CType::Prim(PrimType::Int), false),
//!     ],
//!     None,
//! )?;
//!
//! let mut out = String::new();
//! let mut emitter = CEmitter::new(&mut out, "");
//! garnet_engine::emit_class(&registry, point, &mut emitter)?;
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// Class definitions and field flattening
pub mod class;

/// Implicit conversions and explicit conversion routines
pub mod convert;

/// C source emission
pub mod emit;

/// Method and constructor descriptors
pub mod function;

/// Class registry: arena, checked registration, inheritance traversal
pub mod registry;

/// Overload resolution across the inheritance chain
pub mod resolve;

/// Generic/typed class variants
pub mod typed;

/// Core type definitions
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use class::{ClassDef, FieldDef};
pub use convert::{conversion_path, Conversion, ConverterDef};
pub use emit::{emit_class, CEmitter, EmitError, FreeStmt};
pub use function::{FunctionDef, Param};
pub use registry::{ChildrenIndex, ClassId, ClassRegistry, Descendants, RegistryError};
pub use resolve::{resolve, Candidate, Resolution};
pub use typed::TypedVariant;
pub use types::{CType, PrimType};
