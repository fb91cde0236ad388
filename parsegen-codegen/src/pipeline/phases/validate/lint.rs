//! Lint trait for schema validation.

use parsegen_schema::{NameOverrideMap, SchemaEntry};

use crate::pipeline::Diagnostic;

/// A check over the whole schema snapshot and its overrides.
///
/// Lints only report; whether an error stops the run is up to the
/// validate phase.
pub trait Lint: Send + Sync {
    /// Kebab-case lint name, e.g. `duplicate-class`.
    fn name(&self) -> &'static str;

    fn check(
        &self,
        schemas: &[SchemaEntry],
        overrides: &NameOverrideMap,
        diagnostics: &mut Vec<Diagnostic>,
    );
}
