// SPDX-License-Identifier: GPL-3.0-only

//! Layout inheritance resolution logic.
//!
//! A definition may name a parent in `inherits`. Resolution loads the parent
//! chain, merges each child over its parent and reports cycles and chains
//! deeper than [`MAX_INHERITANCE_DEPTH`].

use crate::app_settings::MAX_INHERITANCE_DEPTH;
use crate::layout::parser::read_embedded_raw;
use crate::layout::types::{LayoutDefinition, LayoutError};

/// Resolves inheritance against the embedded definitions.
///
/// `origin` names the definition being resolved (resource name or file
/// path) and starts the chain used in cycle reports.
///
/// # Example
///
/// ```rust,ignore
/// use expected_layouts::layout::inheritance::resolve_inheritance;
/// use expected_layouts::layout::types::LayoutDefinition;
///
/// let definition = LayoutDefinition {
///     name: "nl".to_string(),
///     inherits: Some("qwerty".to_string()),
///     ..LayoutDefinition::default()
/// };
/// let resolved = resolve_inheritance(definition, None)?;
/// assert!(!resolved.phone_rows.is_empty());
/// ```
pub fn resolve_inheritance(
    definition: LayoutDefinition,
    origin: Option<&str>,
) -> Result<LayoutDefinition, LayoutError> {
    resolve_inheritance_with(definition, origin, read_embedded_raw)
}

/// Resolves inheritance, loading parents through `load`.
pub fn resolve_inheritance_with<F>(
    definition: LayoutDefinition,
    origin: Option<&str>,
    load: F,
) -> Result<LayoutDefinition, LayoutError>
where
    F: Fn(&str) -> Result<LayoutDefinition, LayoutError>,
{
    let mut chain = Vec::new();
    if let Some(name) = origin {
        chain.push(name.to_string());
    }
    resolve_recursive(definition, &load, &mut chain, 0)
}

fn resolve_recursive<F>(
    definition: LayoutDefinition,
    load: &F,
    chain: &mut Vec<String>,
    depth: usize,
) -> Result<LayoutDefinition, LayoutError>
where
    F: Fn(&str) -> Result<LayoutDefinition, LayoutError>,
{
    if depth > MAX_INHERITANCE_DEPTH {
        return Err(LayoutError::max_depth_exceeded(
            "Inheritance chain too deep",
            MAX_INHERITANCE_DEPTH,
            depth,
        ));
    }

    let parent_name = match &definition.inherits {
        Some(name) => name.clone(),
        None => return Ok(definition),
    };

    if chain.contains(&parent_name) {
        return Err(LayoutError::circular_reference(
            format!(
                "Circular inheritance detected: layout inherits from '{}'",
                parent_name
            ),
            format!("{} -> {}", chain.join(" -> "), parent_name),
        ));
    }
    chain.push(parent_name.clone());

    tracing::debug!(
        "Layout '{}' inherits from '{}'",
        definition.name,
        parent_name
    );
    let parent = load(&parent_name)?;
    let resolved_parent = resolve_recursive(parent, load, chain, depth + 1)?;

    Ok(merge_definitions(definition, resolved_parent))
}

/// Merges a child definition over its parent.
///
/// The child's name wins unless empty. Non-empty child rows replace the
/// parent's; a child that replaces the phone rows also stops inheriting the
/// parent's tablet rows. Customizer settings merge field by field.
pub fn merge_definitions(child: LayoutDefinition, parent: LayoutDefinition) -> LayoutDefinition {
    let overrides_rows = !child.phone_rows.is_empty();

    LayoutDefinition {
        name: if child.name.is_empty() {
            parent.name
        } else {
            child.name
        },
        locale: child.locale.or(parent.locale),
        inherits: None,
        phone_rows: if overrides_rows {
            child.phone_rows
        } else {
            parent.phone_rows
        },
        tablet_rows: if overrides_rows {
            child.tablet_rows
        } else {
            child.tablet_rows.or(parent.tablet_rows)
        },
        caseless: child.caseless.or(parent.caseless),
        customizer: child.customizer.merged_with(parent.customizer),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::customizer::CurrencyZone;
    use crate::layout::types::{CustomizerSpec, KeySpec};
    use crate::locale::Locale;
    use std::collections::HashMap;

    fn rows(labels: &[&[&str]]) -> Vec<Vec<KeySpec>> {
        labels
            .iter()
            .map(|row| row.iter().map(|l| KeySpec::Label(l.to_string())).collect())
            .collect()
    }

    fn def(name: &str, inherits: Option<&str>) -> LayoutDefinition {
        LayoutDefinition {
            name: name.to_string(),
            inherits: inherits.map(str::to_string),
            ..LayoutDefinition::default()
        }
    }

    fn loader(
        defs: HashMap<&'static str, LayoutDefinition>,
    ) -> impl Fn(&str) -> Result<LayoutDefinition, LayoutError> {
        move |name| {
            defs.get(name)
                .cloned()
                .ok_or_else(|| LayoutError::resource_not_found(name, None))
        }
    }

    /// Test 1: Child fields override, parent fills the rest
    #[test]
    fn test_merge_child_over_parent() {
        let mut parent = def("base", None);
        parent.phone_rows = rows(&[&["q", "w"], &["a"], &["z"]]);
        parent.locale = Some(Locale::parse("en_US").unwrap());
        parent.customizer.currency = Some(CurrencyZone::Dollar);
        parent.customizer.has_shift_key = Some(true);

        let mut child = def("child", Some("base"));
        child.customizer.currency = Some(CurrencyZone::Euro);

        let merged = merge_definitions(child, parent);
        assert_eq!(merged.name, "child");
        assert_eq!(merged.inherits, None);
        assert_eq!(merged.phone_rows.len(), 3);
        assert_eq!(merged.locale.unwrap().to_string(), "en_US");
        assert_eq!(merged.customizer.currency, Some(CurrencyZone::Euro));
        assert_eq!(merged.customizer.has_shift_key, Some(true));
    }

    /// Test 2: Replacing phone rows drops the parent's tablet rows
    #[test]
    fn test_merge_rows_override() {
        let mut parent = def("base", None);
        parent.phone_rows = rows(&[&["a"]]);
        parent.tablet_rows = Some(rows(&[&["a", "b"]]));

        let mut child = def("child", Some("base"));
        child.phone_rows = rows(&[&["x"]]);
        let merged = merge_definitions(child, parent.clone());
        assert_eq!(merged.tablet_rows, None);

        let merged = merge_definitions(def("child", Some("base")), parent);
        assert_eq!(merged.tablet_rows, Some(rows(&[&["a", "b"]])));
    }

    /// Test 3: Multi-level chains resolve in order
    #[test]
    fn test_resolve_chain() {
        let mut root = def("root", None);
        root.phone_rows = rows(&[&["r"]]);
        root.customizer = CustomizerSpec {
            has_shift_key: Some(false),
            ..CustomizerSpec::default()
        };
        let mut middle = def("middle", Some("root"));
        middle.customizer.currency = Some(CurrencyZone::Euro);

        let load = loader(HashMap::from([("root", root), ("middle", middle)]));
        let resolved =
            resolve_inheritance_with(def("leaf", Some("middle")), Some("leaf"), load).unwrap();

        assert_eq!(resolved.name, "leaf");
        assert_eq!(resolved.phone_rows, rows(&[&["r"]]));
        assert_eq!(resolved.customizer.currency, Some(CurrencyZone::Euro));
        assert_eq!(resolved.customizer.has_shift_key, Some(false));
    }

    /// Test 4: Cycles are reported with the chain
    #[test]
    fn test_circular_inheritance() {
        let load = loader(HashMap::from([
            ("a", def("a", Some("b"))),
            ("b", def("b", Some("a"))),
        ]));

        match resolve_inheritance_with(def("a", Some("b")), Some("a"), load).unwrap_err() {
            LayoutError::CircularReference { chain, .. } => assert_eq!(chain, "a -> b -> a"),
            other => panic!("Expected CircularReference, got {}", other),
        }
    }

    /// Test 5: Chains deeper than the limit fail
    #[test]
    fn test_max_depth() {
        let mut defs = HashMap::new();
        let names = ["p0", "p1", "p2", "p3", "p4", "p5", "p6"];
        for pair in names.windows(2) {
            defs.insert(pair[0], def(pair[0], Some(pair[1])));
        }
        defs.insert("p6", def("p6", None));

        let err = resolve_inheritance_with(def("leaf", Some("p0")), None, loader(defs))
            .unwrap_err();
        match err {
            LayoutError::MaxDepthExceeded { max_depth, actual_depth, .. } => {
                assert_eq!(max_depth, MAX_INHERITANCE_DEPTH);
                assert_eq!(actual_depth, MAX_INHERITANCE_DEPTH + 1);
            }
            other => panic!("Expected MaxDepthExceeded, got {}", other),
        }
    }

    /// Test 6: Missing parents surface the loader error
    #[test]
    fn test_missing_parent() {
        let err = resolve_inheritance(def("x", Some("no_such_layout")), None).unwrap_err();
        assert!(matches!(err, LayoutError::ResourceNotFound { .. }));
    }
}
