//! Compilation pipeline for schema translation.
//!
//! The [`Pipeline`] runs explicit phases over a schema snapshot:
//!
//! - Validate: lints over schema entries and overrides
//! - Translate: schema entries to class descriptors
//!
//! Non-fatal findings are collected as [`Diagnostic`]s in the
//! [`CompilationContext`], which language generators consume afterwards.
//!
//! # Example
//!
//! ```ignore
//! use parsegen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(entries, overrides)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx, outputs, runtime);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
