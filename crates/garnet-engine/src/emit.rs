//! C source emission
//!
//! Serializes one class at a time into an append-only sink: struct layout,
//! constructors, the synthesized deconstructor, methods, the typed
//! variant, and explicit conversion routines, in that fixed order.
//! Emission is deterministic: identical class state yields byte-identical
//! text.

use crate::class::ClassDef;
use crate::registry::{ClassId, ClassRegistry};
use crate::types::CType;
use std::fmt::{self, Write};
use thiserror::Error;

/// Errors raised while emitting a class.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A field flagged for release has a type that owns no resource
    #[error("field `{field}` of class `{class}` is flagged for release but its type owns no resource")]
    NonReleasableField {
        /// Class being emitted
        class: String,
        /// Offending field
        field: String,
    },

    /// The output sink rejected a write
    #[error("write to output sink failed")]
    Fmt(#[from] fmt::Error),
}

/// Line-oriented writer over any `fmt::Write` sink.
///
/// Every line gets the caller-supplied prefix; nested blocks add one tab
/// per depth level on top of it.
#[derive(Debug)]
pub struct CEmitter<W: Write> {
    out: W,
    prefix: String,
    depth: usize,
}

impl<W: Write> CEmitter<W> {
    /// Wrap a sink with the given indent prefix.
    pub fn new(out: W, prefix: &str) -> Self {
        Self {
            out,
            prefix: prefix.to_string(),
            depth: 0,
        }
    }

    /// Write one line: prefix, depth tabs, text, newline.
    pub fn line(&mut self, text: &str) -> Result<(), EmitError> {
        self.out.write_str(&self.prefix)?;
        for _ in 0..self.depth {
            self.out.write_char('\t')?;
        }
        self.out.write_str(text)?;
        self.out.write_char('\n')?;
        Ok(())
    }

    /// Enter a nested block.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Leave a nested block.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Unwrap the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// A `free(<expr>);` statement.
///
/// Used by the synthesized deconstructor for raw releases and the final
/// self-release, and by statement lowering for scope exits.
#[derive(Debug, Clone)]
pub struct FreeStmt {
    /// Expression whose allocation is released
    pub target: String,
}

impl FreeStmt {
    /// Create a release statement for the given expression.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Emit the statement at the current indent.
    pub fn emit<W: Write>(&self, e: &mut CEmitter<W>) -> Result<(), EmitError> {
        e.line(&format!("free({});", self.target))
    }
}

/// Emit one class in the fixed section order.
///
/// 1. struct declaration over the flattened field list
/// 2. constructors, declaration order
/// 3. synthesized deconstructor
/// 4. methods, declaration order
/// 5. typed variant, if present
/// 6. explicit conversion routines, declaration order
pub fn emit_class<W: Write>(
    registry: &ClassRegistry,
    id: ClassId,
    e: &mut CEmitter<W>,
) -> Result<(), EmitError> {
    let class = registry.get(id);

    e.line(&format!("typedef struct {} {{", class.name))?;
    e.indent();
    for field in &class.all_fields {
        e.line(&format!("{} {};", field.ty.c_name(registry), field.name))?;
    }
    e.dedent();
    e.line(&format!("}} {};", class.name))?;

    for ctor in &class.constructors {
        ctor.emit(registry, e)?;
    }

    emit_deconstructor(registry, class, e)?;

    for m in &class.methods {
        m.emit(registry, e)?;
    }

    if let Some(typed) = &class.typed {
        typed.emit(e)?;
    }

    for conv in &class.converters {
        conv.emit(registry, e)?;
    }

    Ok(())
}

/// Synthesize the deconstructor for a class.
///
/// Only the class's OWN declared fields are released here; ancestor field
/// cleanup belongs to the ancestor's deconstructor. Flagged class fields
/// dispatch to the field class's deconstructor, flagged raw fields to
/// `free`. The instance's own allocation is released last.
fn emit_deconstructor<W: Write>(
    registry: &ClassRegistry,
    class: &ClassDef,
    e: &mut CEmitter<W>,
) -> Result<(), EmitError> {
    e.line(&format!(
        "void {}_DeConstruct({}* this) {{",
        class.name, class.name
    ))?;
    e.indent();
    for field in &class.fields {
        if !field.to_release {
            continue;
        }
        match &field.ty {
            CType::Class(fid) => {
                e.line(&format!(
                    "{}_DeConstruct(this->{});",
                    registry.get(*fid).name,
                    field.name
                ))?;
            }
            CType::Raw(_) => FreeStmt::new(format!("this->{}", field.name)).emit(e)?,
            CType::Prim(_) => {
                return Err(EmitError::NonReleasableField {
                    class: class.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }
    FreeStmt::new("this").emit(e)?;
    e.dedent();
    e.line("}")?;
    Ok(())
}
