//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`TypeMapper`] - Trait for rendering descriptor types in a language
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
