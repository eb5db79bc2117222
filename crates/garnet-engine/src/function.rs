//! Method and constructor descriptors
//!
//! Function bodies arrive from the lowering collaborator as finished C
//! statement lines; this core only needs the structured signature for
//! overload resolution and the ability to emit the routine verbatim.

use crate::convert::{conversion_path, Conversion};
use crate::emit::{CEmitter, EmitError};
use crate::registry::ClassRegistry;
use crate::types::CType;
use std::fmt::Write;

/// One formal parameter of a routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name as emitted
    pub name: String,
    /// Declared parameter type
    pub ty: CType,
}

impl Param {
    /// Create a parameter descriptor.
    pub fn new(name: impl Into<String>, ty: CType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A method or constructor attached to a class.
///
/// `name` is the structured base name used by overload resolution (e.g.
/// `draw`); `symbol` is the emitted C identifier, `<Class>_<name>` by
/// convention, uniquified by the program builder when overloads would
/// collide.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// Base name looked up during resolution
    pub name: String,
    /// Emitted C identifier
    pub symbol: String,
    /// Receiver type for methods, emitted as a leading `this` parameter.
    /// Not part of the resolved signature: call sites pass the receiver
    /// separately. Constructors have none.
    pub receiver: Option<CType>,
    /// Formal parameters, in order
    pub params: Vec<Param>,
    /// Return type
    pub ret: CType,
    /// Already-lowered C statement lines forming the body
    pub body: Vec<String>,
}

impl FunctionDef {
    /// Create a routine descriptor.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        params: Vec<Param>,
        ret: CType,
        body: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            receiver: None,
            params,
            ret,
            body,
        }
    }

    /// Attach the receiver type (methods only).
    pub fn with_receiver(mut self, receiver: CType) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Test whether this routine accepts `args`, and how.
    ///
    /// Returns one conversion list per parameter (empty list: exact match),
    /// or `None` when any argument has no implicit path to its parameter
    /// or the arity differs.
    pub fn callable_with(
        &self,
        registry: &ClassRegistry,
        args: &[CType],
    ) -> Option<Vec<Vec<Conversion>>> {
        if args.len() != self.params.len() {
            return None;
        }
        let mut plans = Vec::with_capacity(args.len());
        for (param, arg) in self.params.iter().zip(args) {
            plans.push(conversion_path(registry, arg, &param.ty)?);
        }
        Some(plans)
    }

    /// Emit the routine: signature, body one indent unit inside, close.
    pub fn emit<W: Write>(
        &self,
        registry: &ClassRegistry,
        e: &mut CEmitter<W>,
    ) -> Result<(), EmitError> {
        let mut params: Vec<String> = Vec::with_capacity(self.params.len() + 1);
        if let Some(receiver) = &self.receiver {
            params.push(format!("{} this", receiver.c_name(registry)));
        }
        params.extend(
            self.params
                .iter()
                .map(|p| format!("{} {}", p.ty.c_name(registry), p.name)),
        );
        e.line(&format!(
            "{} {}({}) {{",
            self.ret.c_name(registry),
            self.symbol,
            params.join(", ")
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
