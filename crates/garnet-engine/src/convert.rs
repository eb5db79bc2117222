//! Implicit conversions and explicit conversion routines
//!
//! Overload resolution admits three kinds of implicit conversion per
//! argument: primitive widening, upcast of a class instance to one of its
//! ancestors, and invocation of a user conversion routine declared
//! implicit. Explicit conversion routines are emitted with their class but
//! never considered during resolution.

use crate::emit::{CEmitter, EmitError};
use crate::registry::{ClassId, ClassRegistry};
use crate::types::{CType, PrimType};
use std::fmt::Write;

/// One conversion applied to a call argument at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// Primitive widening, e.g. `int` to `double`
    Widen {
        /// Argument primitive
        from: PrimType,
        /// Parameter primitive
        to: PrimType,
    },
    /// Upcast of a class instance to one of its ancestors
    Upcast {
        /// Argument class
        from: ClassId,
        /// Ancestor class expected by the parameter
        to: ClassId,
    },
    /// Call of an implicit user conversion routine
    Invoke {
        /// Class that declares the routine
        class: ClassId,
        /// Index into that class's converter list
        converter: usize,
    },
}

/// A declared type-conversion routine attached to a class.
#[derive(Debug, Clone)]
pub struct ConverterDef {
    /// Emitted C identifier of the routine
    pub symbol: String,
    /// Source type
    pub from: CType,
    /// Target type
    pub to: CType,
    /// Implicit converters participate in overload resolution
    pub implicit: bool,
    /// Already-lowered C statement lines forming the routine body
    pub body: Vec<String>,
}

impl ConverterDef {
    /// Create a conversion routine descriptor.
    pub fn new(
        symbol: impl Into<String>,
        from: CType,
        to: CType,
        implicit: bool,
        body: Vec<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            from,
            to,
            implicit,
            body,
        }
    }

    /// Emit the routine: signature, body one indent unit inside, close.
    pub fn emit<W: Write>(
        &self,
        registry: &ClassRegistry,
        e: &mut CEmitter<W>,
    ) -> Result<(), EmitError> {
        e.line(&format!(
            "{} {}({} value) {{",
            self.to.c_name(registry),
            self.symbol,
            self.from.c_name(registry)
        ))?;
        e.indent();
        for line in &self.body {
            e.line(line)?;
        }
        e.dedent();
        e.line("}")?;
        Ok(())
    }
}

/// Compute the conversions needed to pass a `from`-typed argument to a
/// `to`-typed parameter.
///
/// Returns `None` when no implicit path exists. An empty list means the
/// types already match. Converter search is deterministic: classes in
/// registration order, converters in declaration order, first hit wins.
pub fn conversion_path(
    registry: &ClassRegistry,
    from: &CType,
    to: &CType,
) -> Option<Vec<Conversion>> {
    if from == to {
        return Some(Vec::new());
    }
    match (from, to) {
        (CType::Prim(a), CType::Prim(b)) if a.widens_to(*b) => {
            Some(vec![Conversion::Widen { from: *a, to: *b }])
        }
        (CType::Class(c), CType::Class(p)) if registry.is_ancestor(*p, *c) => {
            Some(vec![Conversion::Upcast { from: *c, to: *p }])
        }
        _ => registry
            .find_implicit_converter(from, to)
            .map(|(class, converter)| vec![Conversion::Invoke { class, converter }]),
    }
}
