//! Lint for override names.

use parsegen_core::validate_identifier;
use parsegen_schema::{NameOverrideMap, SchemaEntry};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that rejects renames which cannot be declared as a class.
pub struct OverrideNameLint;

impl Lint for OverrideNameLint {
    fn name(&self) -> &'static str {
        "override-name"
    }

    fn check(
        &self,
        _schemas: &[SchemaEntry],
        overrides: &NameOverrideMap,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for (kind, value) in overrides.iter() {
            let Some(name) = value.rename() else {
                continue;
            };
            if let Some(reason) = validate_identifier(name) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("invalid name '{}' for {}: {}", name, kind, reason),
                    )
                    .at(format!("classes.{}", kind)),
                );
            }
        }
    }
}
