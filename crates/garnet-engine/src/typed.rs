//! Generic/typed class variants
//!
//! A class may carry at most one parameterized specialization. Its text is
//! produced by the generic-instantiation collaborator; the emitter only
//! places it between the class's methods and its conversion routines.

use crate::emit::{CEmitter, EmitError};
use std::fmt::Write;

/// The typed specialization attached to a class.
#[derive(Debug, Clone)]
pub struct TypedVariant {
    /// Mangled name of the specialization (e.g. `List_int`)
    pub name: String,
    /// Pre-generated C source lines
    pub body: Vec<String>,
}

impl TypedVariant {
    /// Create a typed variant from its pre-generated text.
    pub fn new(name: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Emit the variant's text at the current indent.
    pub fn emit<W: Write>(&self, e: &mut CEmitter<W>) -> Result<(), EmitError> {
        for line in &self.body {
            e.line(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_verbatim_lines() {
        let typed = TypedVariant::new(
            "List_int",
            vec![
                "typedef struct List_int {".to_string(),
                "\tint* items;".to_string(),
                "} List_int;".to_string(),
            ],
        );

        let mut out = String::new();
        let mut e = CEmitter::new(&mut out, "  ");
        typed.emit(&mut e).unwrap();

        assert_eq!(
            out,
            "  typedef struct List_int {\n  \tint* items;\n  } List_int;\n"
        );
    }
}
