//! Check operation - schema and override validation.

use parsegen_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use parsegen_schema::{NameOverrideMap, SchemaEntry};
use tracing::debug;

use super::describe;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline without emitting anything. A failed run is reported
/// through its diagnostics rather than returned as an error.
pub fn check(
    source: String,
    entries: Vec<SchemaEntry>,
    overrides: NameOverrideMap,
) -> CheckReport {
    debug!(source = %source, entries = entries.len(), "checking");
    let mut ctx = CompilationContext::new(entries, overrides);
    let outcome = Pipeline::new().execute(&mut ctx);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = describe(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    // Translation failures carry no diagnostic of their own.
    if let Err(err) = outcome
        && errors.is_empty()
    {
        errors.push(format!("{:#}", err));
    }

    CheckReport {
        source,
        classes: ctx.classes().iter().map(|c| c.name.clone()).collect(),
        errors,
        warnings,
        infos,
    }
}
