//! Record Translator.

use parsegen_ir::{Attribute, ClassDescriptor, ConstructorShape, DefaultEntry};
use parsegen_schema::{BuiltinKind, NameOverrideMap, SchemaEntry};
use tracing::debug;

use super::{FieldMapper, NameResolver, TranslateError};
use crate::pipeline::Diagnostic;

/// Fields present on every record kind, never translated.
pub const IMPLICIT_FIELDS: [&str; 3] = ["ACL", "createdAt", "updatedAt"];

/// Translates schema entries into class descriptors.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    resolver: NameResolver<'a>,
    mapper: FieldMapper<'a>,
}

impl<'a> Translator<'a> {
    pub fn new(overrides: &'a NameOverrideMap) -> Self {
        let resolver = NameResolver::new(overrides);
        Self {
            resolver,
            mapper: FieldMapper::new(resolver),
        }
    }

    /// Translate one entry.
    ///
    /// Returns `Ok(None)` for built-ins the SDK already declares.
    ///
    /// # Errors
    ///
    /// Fails on the first field that cannot be mapped; no descriptor is
    /// produced for the entry.
    pub fn translate(
        &self,
        entry: &SchemaEntry,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<ClassDescriptor>, TranslateError> {
        let kind = entry.class_name.as_str();
        if !self.resolver.should_emit(kind) {
            debug!(class = kind, "skipping built-in without override");
            return Ok(None);
        }

        let name = self.resolver.resolve_name(kind);
        let mut attributes = Vec::new();
        let mut defaults = Vec::new();

        for (field_name, field) in &entry.fields {
            if IMPLICIT_FIELDS.contains(&field_name.as_str()) {
                continue;
            }
            let mapped = self
                .mapper
                .map_field(kind, field_name, field, diagnostics)?;
            if let Some(value) = mapped.default {
                defaults.push(DefaultEntry::new(field_name.as_str(), value));
            }
            attributes.push(Attribute::new(field_name.as_str(), mapped.ty, mapped.optional));
        }

        let constructor = match BuiltinKind::from_identifier(kind) {
            Some(BuiltinKind::User) => ConstructorShape::Account,
            Some(BuiltinKind::Role) => ConstructorShape::Role,
            Some(BuiltinKind::Session) => ConstructorShape::Session,
            None => ConstructorShape::Generic,
        };

        debug!(
            class = kind,
            name = %name,
            attributes = attributes.len(),
            "translated class"
        );

        Ok(Some(ClassDescriptor {
            kind: kind.to_string(),
            name,
            base: NameResolver::base_class_for(kind),
            attributes,
            defaults,
            constructor,
        }))
    }

    /// Translate every entry in order, skipping absent descriptors.
    pub fn translate_all(
        &self,
        entries: &[SchemaEntry],
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<ClassDescriptor>, TranslateError> {
        let mut classes = Vec::with_capacity(entries.len());
        for entry in entries {
            if let Some(class) = self.translate(entry, diagnostics)? {
                classes.push(class);
            }
        }
        Ok(classes)
    }
}
