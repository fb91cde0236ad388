//! Schema translation and shared code generation utilities for parsegen.
//!
//! This crate turns schema entries into [`ClassDescriptor`](parsegen_ir::ClassDescriptor)s
//! and provides the target-agnostic building blocks used by language backends
//! (e.g., `parsegen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`translate`] - Naming Resolver, Field Type Mapper and Record Translator
//! - [`pipeline`] - Validate → translate phases with diagnostics
//! - [`language`] - Language backend abstractions (LanguageCodegen, TypeMapper)

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod translate;
