//! Schema entries to class descriptors.
//!
//! - [`NameResolver`] - visible names, base classes and emission policy
//! - [`FieldMapper`] - one field to a type, optionality and default
//! - [`Translator`] - one schema entry to a [`ClassDescriptor`](parsegen_ir::ClassDescriptor)
//!
//! All three are pure functions of their inputs; the only state is the
//! borrowed [`NameOverrideMap`](parsegen_schema::NameOverrideMap).

mod error;
mod mapper;
mod resolver;
mod translator;

pub use error::TranslateError;
pub use mapper::{FieldMapper, MappedField};
pub use resolver::NameResolver;
pub use translator::{IMPLICIT_FIELDS, Translator};
