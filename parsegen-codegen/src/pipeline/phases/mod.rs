//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints schema entries and overrides
//! - [`TranslatePhase`] - translates schema entries to class descriptors

mod translate;
mod validate;

pub use translate::TranslatePhase;
pub use validate::{
    DanglingTargetLint, DuplicateClassLint, Lint, OverrideNameLint, ValidatePhase,
};
