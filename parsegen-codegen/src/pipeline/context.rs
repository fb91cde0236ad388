//! Compilation context passed through pipeline phases.

use parsegen_ir::ClassDescriptor;
use parsegen_schema::{NameOverrideMap, SchemaEntry};

use super::diagnostic::{Diagnostic, Severity};

/// State of one compilation run.
///
/// Carries one schema snapshot and one override map; independent contexts
/// share nothing and can be processed on separate threads.
#[derive(Debug)]
pub struct CompilationContext {
    /// Schema entries in source order.
    pub schemas: Vec<SchemaEntry>,
    pub overrides: NameOverrideMap,
    /// Set by the translate phase.
    pub classes: Option<Vec<ClassDescriptor>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schemas: Vec<SchemaEntry>, overrides: NameOverrideMap) -> Self {
        Self {
            schemas,
            overrides,
            classes: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    /// Translated descriptors, empty until the translate phase has run.
    pub fn classes(&self) -> &[ClassDescriptor] {
        self.classes.as_deref().unwrap_or_default()
    }

    /// Take the descriptors out of the context.
    pub fn take_classes(&mut self) -> Vec<ClassDescriptor> {
        self.classes.take().unwrap_or_default()
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_empty() {
        let ctx = CompilationContext::new(vec![SchemaEntry::new("Post")], NameOverrideMap::new());

        assert!(ctx.classes.is_none());
        assert!(ctx.classes().is_empty());
        assert!(!ctx.has_errors());
        assert!(!ctx.has_warnings());
    }

    #[test]
    fn test_diagnostics_by_severity() {
        let mut ctx = CompilationContext::new(Vec::new(), NameOverrideMap::new());
        ctx.diagnostics.extend([
            Diagnostic::warning("translate", "unknown field type").at("Post.blob"),
            Diagnostic::error("validate", "duplicate class").at("Post"),
            Diagnostic::info("validate", "nothing to do"),
            Diagnostic::error("validate", "invalid name").at("classes._User"),
        ]);

        assert_eq!(ctx.error_count(), 2);
        assert!(ctx.has_warnings());
        let locations: Vec<_> = ctx.errors().filter_map(|d| d.location.as_deref()).collect();
        assert_eq!(locations, ["Post", "classes._User"]);
    }

    #[test]
    fn test_take_classes() {
        let mut ctx = CompilationContext::new(Vec::new(), NameOverrideMap::new());
        ctx.classes = Some(Vec::new());

        assert!(ctx.take_classes().is_empty());
        assert!(ctx.classes.is_none());
    }
}
