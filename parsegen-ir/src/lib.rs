//! Intermediate representation types for parsegen.
//!
//! This crate provides the structured output of record translation. Every
//! artifact emitter consumes the same [`ClassDescriptor`] list, so the types
//! here are the single source of truth between translation and rendering.
//!
//! # Architecture
//!
//! ```text
//! schema JSON → parsegen-schema (parsing) → parsegen-ir (descriptors) → emitters
//! ```
//!
//! The IR types are:
//! - Target-agnostic (no TypeScript syntax is stored, only structure)
//! - Immutable once built by the translator
//! - Serializable, for the `--dump-descriptors` view

mod class;
mod types;

pub use class::{Attribute, ClassDescriptor, ConstructorShape, DefaultEntry};
pub use types::{BaseClass, ClassRef, DefaultValue, TypeExpr};
