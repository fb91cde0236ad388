//! Lint for references to kinds missing from the schema.

use std::collections::HashSet;

use parsegen_schema::{BuiltinKind, NameOverrideMap, SchemaEntry};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about pointer and relation targets that do not exist.
pub struct DanglingTargetLint;

impl Lint for DanglingTargetLint {
    fn name(&self) -> &'static str {
        "dangling-target"
    }

    fn check(
        &self,
        schemas: &[SchemaEntry],
        _overrides: &NameOverrideMap,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let known: HashSet<&str> = schemas.iter().map(|e| e.class_name.as_str()).collect();

        for entry in schemas {
            for (name, field) in &entry.fields {
                if !field.kind.needs_target() {
                    continue;
                }
                let Some(target) = field.target_class.as_deref() else {
                    continue;
                };
                if target.is_empty() || known.contains(target) || BuiltinKind::is_builtin(target) {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("{} target '{}' is not in the schema", field.kind, target),
                    )
                    .at(format!("{}.{}", entry.class_name, name)),
                );
            }
        }
    }
}
