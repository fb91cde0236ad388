//! Validate phase - runs lints over schema entries and overrides.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DanglingTargetLint, DuplicateClassLint, OverrideNameLint};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Runs every lint, then fails if any of them reported an error.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(OverrideNameLint),
                Box::new(DuplicateClassLint),
                Box::new(DanglingTargetLint),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of the lints, in run order.
    pub fn lint_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lints.iter().map(|lint| lint.name())
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.schemas, &ctx.overrides, &mut ctx.diagnostics);
            debug!(
                lint = lint.name(),
                findings = ctx.diagnostics.len() - before,
                "lint finished"
            );
        }

        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use parsegen_schema::{FieldDescriptor, FieldKind, NameOverrideMap, SchemaEntry};

    use super::*;
    use crate::pipeline::Diagnostic;

    struct RejectAll;

    impl Lint for RejectAll {
        fn name(&self) -> &'static str {
            "reject-all"
        }

        fn check(
            &self,
            schemas: &[SchemaEntry],
            _overrides: &NameOverrideMap,
            diagnostics: &mut Vec<Diagnostic>,
        ) {
            for entry in schemas {
                diagnostics.push(Diagnostic::error("validate", "rejected").at(&entry.class_name));
            }
        }
    }

    #[test]
    fn test_errors_fail_the_phase() {
        let mut ctx =
            CompilationContext::new(vec![SchemaEntry::new("Post")], NameOverrideMap::new());

        let err = ValidatePhase::empty()
            .with_lint(RejectAll)
            .run(&mut ctx)
            .unwrap_err();

        assert_eq!(err.to_string(), "Validation failed with 1 error(s)");
        assert_eq!(ctx.diagnostics[0].location.as_deref(), Some("Post"));
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = CompilationContext::new(
            vec![SchemaEntry::new("Post").field(
                "author",
                FieldDescriptor::new(FieldKind::Pointer).target("Ghost"),
            )],
            NameOverrideMap::new(),
        );

        let result = ValidatePhase::empty()
            .with_lint(DanglingTargetLint)
            .run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        let names: Vec<&str> = ValidatePhase::new().lint_names().collect();
        assert_eq!(names, ["override-name", "duplicate-class", "dangling-target"]);
    }
}
