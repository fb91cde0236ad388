//! Translate phase - turns schema entries into class descriptors.

use eyre::{Result, WrapErr};
use tracing::debug;

use crate::{
    pipeline::{CompilationContext, Phase},
    translate::Translator,
};

/// Phase that runs the Record Translator over every schema entry.
pub struct TranslatePhase;

impl Phase for TranslatePhase {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let classes = Translator::new(&ctx.overrides)
            .translate_all(&ctx.schemas, &mut ctx.diagnostics)
            .wrap_err("failed to translate schema")?;

        debug!(
            entries = ctx.schemas.len(),
            classes = classes.len(),
            "translation complete"
        );
        ctx.classes = Some(classes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use parsegen_schema::{FieldDescriptor, FieldKind, NameOverrideMap, SchemaEntry};

    use super::*;

    #[test]
    fn test_populates_classes() {
        let mut ctx = CompilationContext::new(
            vec![SchemaEntry::new("_User"), SchemaEntry::new("Post")],
            NameOverrideMap::new(),
        );

        TranslatePhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.classes().len(), 1);
        assert_eq!(ctx.classes()[0].name, "Post");
    }

    #[test]
    fn test_unknown_kind_is_warning() {
        let mut ctx = CompilationContext::new(
            vec![SchemaEntry::new("Post").field("blob", FieldDescriptor::new("Bytes"))],
            NameOverrideMap::new(),
        );

        TranslatePhase.run(&mut ctx).unwrap();

        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_missing_target_fails() {
        let mut ctx = CompilationContext::new(
            vec![SchemaEntry::new("Comment").field("post", FieldDescriptor::new(FieldKind::Pointer))],
            NameOverrideMap::new(),
        );

        let err = TranslatePhase.run(&mut ctx).unwrap_err();

        assert!(
            err.chain()
                .any(|cause| cause.to_string().contains("requires a target class"))
        );
        assert!(ctx.classes.is_none());
    }
}
