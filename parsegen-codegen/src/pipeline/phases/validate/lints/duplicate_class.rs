//! Lint for colliding class names.

use std::collections::HashMap;

use parsegen_schema::{NameOverrideMap, SchemaEntry};

use super::super::Lint;
use crate::{pipeline::Diagnostic, translate::NameResolver};

/// Lint that rejects two emitted classes sharing one name.
///
/// Catches repeated schema entries and renames that collide with a
/// user-defined kind.
pub struct DuplicateClassLint;

impl Lint for DuplicateClassLint {
    fn name(&self) -> &'static str {
        "duplicate-class"
    }

    fn check(
        &self,
        schemas: &[SchemaEntry],
        overrides: &NameOverrideMap,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let resolver = NameResolver::new(overrides);
        let mut seen: HashMap<String, &str> = HashMap::new();

        for entry in schemas {
            let kind = entry.class_name.as_str();
            if !resolver.should_emit(kind) {
                continue;
            }
            let name = resolver.resolve_name(kind);
            if let Some(first) = seen.get(&name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "class '{}' is generated for both '{}' and '{}'",
                            name, first, kind
                        ),
                    )
                    .at(kind),
                );
            } else {
                seen.insert(name, kind);
            }
        }
    }
}
