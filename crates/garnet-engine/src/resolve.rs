//! Overload resolution across the inheritance chain
//!
//! A pure function over an immutable registry snapshot. Within one class,
//! the first method in declaration order whose signature accepts the
//! arguments wins; there is no scoring across later successful candidates.
//! A class with no own match delegates the whole search to its parent.

use crate::convert::Conversion;
use crate::function::FunctionDef;
use crate::registry::{ClassId, ClassRegistry};
use crate::types::CType;

/// A successfully resolved call target.
#[derive(Debug)]
pub struct Candidate<'a> {
    /// The class that actually declares the matched method (may be an
    /// ancestor of the class the search started from)
    pub defining: ClassId,
    /// The matched method
    pub method: &'a FunctionDef,
    /// One conversion list per argument, to apply at the call site
    pub conversions: Vec<Vec<Conversion>>,
}

/// Outcome of resolving a call expression.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// A callable target was found
    Resolved(Candidate<'a>),
    /// No method on the class or any ancestor accepts the arguments;
    /// callers must treat this as a hard resolution failure
    Unresolved,
}

impl<'a> Resolution<'a> {
    /// Whether a callable target was found.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// The candidate, if resolution succeeded.
    pub fn candidate(&self) -> Option<&Candidate<'a>> {
        match self {
            Resolution::Resolved(c) => Some(c),
            Resolution::Unresolved => None,
        }
    }
}

/// Resolve a method call on `class` with the given argument types.
///
/// Scans the class's own methods in declaration order for one whose base
/// name matches exactly and whose parameters accept the arguments, then
/// falls back to the parent chain, restarting from the top of each
/// ancestor's own method list.
pub fn resolve<'a>(
    registry: &'a ClassRegistry,
    class: ClassId,
    method: &str,
    args: &[CType],
) -> Resolution<'a> {
    let mut current = Some(class);
    while let Some(id) = current {
        let def = registry.get(id);
        for m in &def.methods {
            if m.name != method {
                continue;
            }
            if let Some(conversions) = m.callable_with(registry, args) {
                return Resolution::Resolved(Candidate {
                    defining: id,
                    method: m,
                    conversions,
                });
            }
        }
        current = def.parent;
    }
    Resolution::Unresolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Param;
    use crate::types::PrimType;

    fn method(name: &str, symbol: &str, params: Vec<Param>) -> FunctionDef {
        FunctionDef::new(name, symbol, params, CType::Prim(PrimType::Void), vec![])
    }

    #[test]
    fn test_first_declared_match_wins() {
        let mut registry = ClassRegistry::new();
        let point = registry.register("Point", vec![], None).unwrap();
        registry.add_method(
            point,
            method(
                "draw",
                "Point_draw",
                vec![Param::new("scale", CType::Prim(PrimType::Double))],
            ),
        );
        // Also callable with an int argument, but declared later.
        registry.add_method(
            point,
            method(
                "draw",
                "Point_draw2",
                vec![Param::new("scale", CType::Prim(PrimType::Int))],
            ),
        );

        let resolution = resolve(&registry, point, "draw", &[CType::Prim(PrimType::Int)]);
        let candidate = resolution.candidate().unwrap();
        assert_eq!(candidate.method.symbol, "Point_draw");
        assert_eq!(candidate.conversions[0].len(), 1);
    }

    #[test]
    fn test_ancestor_fallback_reports_defining_class() {
        let mut registry = ClassRegistry::new();
        let point = registry.register("Point", vec![], None).unwrap();
        let line = registry.register("Line", vec![], Some("Point")).unwrap();
        registry.add_method(
            point,
            method(
                "draw",
                "Point_draw",
                vec![Param::new("scale", CType::Prim(PrimType::Int))],
            ),
        );

        let resolution = resolve(&registry, line, "draw", &[CType::Prim(PrimType::Int)]);
        let candidate = resolution.candidate().unwrap();
        assert_eq!(candidate.defining, point);
        assert_eq!(candidate.method.symbol, "Point_draw");
    }

    #[test]
    fn test_own_method_shadows_ancestor() {
        let mut registry = ClassRegistry::new();
        let point = registry.register("Point", vec![], None).unwrap();
        let line = registry.register("Line", vec![], Some("Point")).unwrap();
        registry.add_method(
            point,
            method(
                "draw",
                "Point_draw",
                vec![Param::new("scale", CType::Prim(PrimType::Int))],
            ),
        );
        registry.add_method(
            line,
            method(
                "draw",
                "Line_draw",
                vec![Param::new("scale", CType::Prim(PrimType::Int))],
            ),
        );

        let resolution = resolve(&registry, line, "draw", &[CType::Prim(PrimType::Int)]);
        let candidate = resolution.candidate().unwrap();
        assert_eq!(candidate.defining, line);
    }

    #[test]
    fn test_rejected_own_overload_still_falls_back() {
        // Line declares a `draw` the arguments cannot satisfy; the search
        // must continue into Point rather than stop at the name match.
        let mut registry = ClassRegistry::new();
        let point = registry.register("Point", vec![], None).unwrap();
        let line = registry.register("Line", vec![], Some("Point")).unwrap();
        registry.add_method(
            line,
            method(
                "draw",
                "Line_draw",
                vec![Param::new("label", CType::Raw("char*".to_string()))],
            ),
        );
        registry.add_method(
            point,
            method(
                "draw",
                "Point_draw",
                vec![Param::new("scale", CType::Prim(PrimType::Int))],
            ),
        );

        let resolution = resolve(&registry, line, "draw", &[CType::Prim(PrimType::Int)]);
        assert_eq!(resolution.candidate().unwrap().defining, point);
    }

    #[test]
    fn test_no_match_anywhere_is_unresolved() {
        let mut registry = ClassRegistry::new();
        let point = registry.register("Point", vec![], None).unwrap();
        let line = registry.register("Line", vec![], Some("Point")).unwrap();
        registry.add_method(
            point,
            method(
                "draw",
                "Point_draw",
                vec![Param::new("scale", CType::Prim(PrimType::Int))],
            ),
        );

        let resolution = resolve(&registry, line, "erase", &[CType::Prim(PrimType::Int)]);
        assert!(!resolution.is_resolved());
        assert!(resolution.candidate().is_none());
    }

    #[test]
    fn test_exact_name_match_ignores_prefix_siblings() {
        // `draw2` must not be considered when resolving `draw`.
        let mut registry = ClassRegistry::new();
        let point = registry.register("Point", vec![], None).unwrap();
        registry.add_method(
            point,
            method(
                "draw2",
                "Point_draw2",
                vec![Param::new("scale", CType::Prim(PrimType::Int))],
            ),
        );

        let resolution = resolve(&registry, point, "draw", &[CType::Prim(PrimType::Int)]);
        assert!(!resolution.is_resolved());
    }
}
