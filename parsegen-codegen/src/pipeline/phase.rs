//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step of the compilation pipeline.
///
/// Phases run in order over a shared [`CompilationContext`]. Non-fatal
/// findings go into `ctx.diagnostics`; returning an error stops the run.
pub trait Phase: Send + Sync {
    /// Short name, used in logs and as the diagnostic phase.
    fn name(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
