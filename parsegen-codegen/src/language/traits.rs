//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use parsegen_ir::{Attribute, ClassRef, DefaultEntry, DefaultValue, TypeExpr};

/// Trait for language-specific code generators.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// Preview the files `generate` would write under `output_dir`
    fn preview(&self, output_dir: &Path) -> Vec<PreviewFile>;

    /// Generate all files relative to `output_dir`
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content was written
    pub written: Vec<String>,
    /// Files already up to date
    pub unchanged: Vec<String>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for rendering descriptor types as language-specific text.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Render a field type
    fn map_type(&self, ty: &TypeExpr) -> String;

    /// Render a reference to a record class
    fn map_class_ref(&self, class_ref: &ClassRef) -> String;

    /// Render a default value literal
    fn map_default(&self, value: &DefaultValue) -> String;

    /// Render a property key, quoting it when needed
    fn map_key(&self, name: &str) -> String;

    /// Render an interface member, e.g. `title?: string;`
    fn map_attribute(&self, attribute: &Attribute) -> String {
        format!(
            "{}{}: {};",
            self.map_key(&attribute.name),
            if attribute.optional { "?" } else { "" },
            self.map_type(&attribute.ty)
        )
    }

    /// Render an object literal entry, e.g. `title: ""`
    fn map_default_entry(&self, entry: &DefaultEntry) -> String {
        format!("{}: {}", self.map_key(&entry.name), self.map_default(&entry.value))
    }
}
