//! Core operations.
//!
//! This module contains the business logic for parsegen commands,
//! separated from CLI argument parsing and output rendering.

use parsegen_codegen::pipeline::Diagnostic;

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};

/// One diagnostic as printed by reports, with its location on a second line.
fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
