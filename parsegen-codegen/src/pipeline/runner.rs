//! Pipeline orchestrator.

use eyre::Result;
use parsegen_schema::{NameOverrideMap, SchemaEntry};
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{TranslatePhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, translate) followed by any user
/// phases.
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new()
///     .phase(MyCustomPhase)
///     .run(schemas, overrides)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on one schema snapshot.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, collects diagnostics
    /// 2. TranslatePhase - builds class descriptors
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(
        &self,
        schemas: Vec<SchemaEntry>,
        overrides: NameOverrideMap,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schemas, overrides);
        self.execute(&mut ctx)?;
        Ok(ctx)
    }

    /// Run every phase over an existing context.
    ///
    /// Diagnostics collected before a fatal phase error stay in `ctx`.
    pub fn execute(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin_phases: Vec<Box<dyn Phase>> =
            vec![Box::new(ValidatePhase::new()), Box::new(TranslatePhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            debug!(phase = phase.name(), "running phase");
            phase.run(ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use parsegen_schema::{BuiltinKind, FieldDescriptor, FieldKind};

    use super::*;

    struct CountingPhase {
        seen: Arc<AtomicUsize>,
    }

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            self.seen.store(ctx.classes().len(), Ordering::SeqCst);
            Ok(())
        }
    }

    fn schemas() -> Vec<SchemaEntry> {
        vec![
            SchemaEntry::new("_User")
                .field("nickname", FieldDescriptor::new(FieldKind::String)),
            SchemaEntry::new("Post")
                .field("title", FieldDescriptor::new(FieldKind::String).required()),
        ]
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(schemas(), NameOverrideMap::new())
            .expect("pipeline should succeed");

        let names: Vec<&str> = ctx.classes().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Post"]);
    }

    #[test]
    fn test_user_phase_runs_after_translate() {
        let seen = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::new().phase(CountingPhase { seen: seen.clone() });

        let overrides = NameOverrideMap::new().with(BuiltinKind::User, "AppUser");
        pipeline.run(schemas(), overrides).expect("pipeline should succeed");

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_validation_stops_translation() {
        let overrides = NameOverrideMap::new().with(BuiltinKind::User, "Post");

        let err = Pipeline::new().run(schemas(), overrides).unwrap_err();

        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_execute_keeps_diagnostics_on_failure() {
        let overrides = NameOverrideMap::new().with(BuiltinKind::User, "Post");
        let mut ctx = CompilationContext::new(schemas(), overrides);

        assert!(Pipeline::new().execute(&mut ctx).is_err());
        assert_eq!(ctx.error_count(), 1);
        assert!(ctx.classes.is_none());
    }
}
