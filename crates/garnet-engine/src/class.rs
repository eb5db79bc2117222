//! Class definitions and field flattening
//!
//! A [`ClassDef`] is the in-memory representation of one declared type:
//! its own fields, the flattened field list inherited from its ancestor
//! chain, and the routines attached to it by the program builder.

use crate::convert::ConverterDef;
use crate::function::FunctionDef;
use crate::registry::ClassId;
use crate::typed::TypedVariant;
use crate::types::CType;

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as it appears in the emitted struct
    pub name: String,
    /// Semantic type of the field
    pub ty: CType,
    /// Whether the synthesized deconstructor must release this field
    pub to_release: bool,
}

impl FieldDef {
    /// Create a field descriptor.
    pub fn new(name: impl Into<String>, ty: CType, to_release: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            to_release,
        }
    }
}

/// One declared class: fields, inherited layout, and attached routines.
///
/// Constructed only through [`ClassRegistry::register`], which fixes
/// `all_fields` at registration time. The member lists are appended to
/// incrementally by the program builder and are expected to be complete
/// before resolution or emission runs.
///
/// [`ClassRegistry::register`]: crate::registry::ClassRegistry::register
#[derive(Debug)]
pub struct ClassDef {
    /// Unique class name within the program
    pub name: String,
    /// Fields declared by this class itself, in declaration order
    pub fields: Vec<FieldDef>,
    /// Ancestor fields followed by own fields, fixed at registration
    pub all_fields: Vec<FieldDef>,
    /// The class this one extends, if any
    pub parent: Option<ClassId>,
    /// Construction routines, in declaration order
    pub constructors: Vec<FunctionDef>,
    /// Method routines, in declaration order
    pub methods: Vec<FunctionDef>,
    /// Generic/typed specialization, if one was attached
    pub typed: Option<TypedVariant>,
    /// Explicit conversion routines, in declaration order
    pub converters: Vec<ConverterDef>,
}

impl ClassDef {
    pub(crate) fn new(
        name: String,
        fields: Vec<FieldDef>,
        all_fields: Vec<FieldDef>,
        parent: Option<ClassId>,
    ) -> Self {
        Self {
            name,
            fields,
            all_fields,
            parent,
            constructors: Vec::new(),
            methods: Vec::new(),
            typed: None,
            converters: Vec::new(),
        }
    }
}

/// Flatten a parent's field layout with a class's own declared fields.
///
/// Pure and order-preserving: the result is the parent's flattened list
/// followed by the own list. Re-running on the same inputs yields an
/// identical sequence, so the emitted struct layout is stable across
/// recompilation.
pub(crate) fn flatten_fields(parent_all: &[FieldDef], own: &[FieldDef]) -> Vec<FieldDef> {
    let mut all = Vec::with_capacity(parent_all.len() + own.len());
    all.extend_from_slice(parent_all);
    all.extend_from_slice(own);
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimType;

    fn field(name: &str) -> FieldDef {
        FieldDef::new(name, CType::Prim(PrimType::Int), false)
    }

    #[test]
    fn test_flatten_preserves_order() {
        let parent = vec![field("x"), field("y")];
        let own = vec![field("label")];

        let all = flatten_fields(&parent, &own);
        let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["x", "y", "label"]);
    }

    #[test]
    fn test_flatten_no_parent() {
        let own = vec![field("x")];
        let all = flatten_fields(&[], &own);
        assert_eq!(all, own);
    }

    #[test]
    fn test_flatten_is_rederivable() {
        let parent = vec![field("a")];
        let own = vec![field("b"), field("c")];
        assert_eq!(flatten_fields(&parent, &own), flatten_fields(&parent, &own));
    }
}
