//! Core utilities and types for parsegen.
//!
//! This crate provides the generated-file sink and the path and identifier
//! helpers shared by the code generators.

mod file;
mod paths;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Import paths
pub use paths::{relative_import_path, strip_source_extension};
// String utilities
pub use utils::{is_valid_identifier, validate_identifier};
