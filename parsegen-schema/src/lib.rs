// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Input model and configuration for parsegen.
//!
//! - [`SchemaEntry`] / [`FieldDescriptor`] - one record kind as described by Parse Server
//! - [`BuiltinKind`] - the closed set of kinds the Parse SDK already declares
//! - [`NameOverrideMap`] - emission/rename policy for built-in kinds
//! - [`Config`] / [`ConfigFile`] - `parsegen.toml`
//! - [`SchemaSource`] - where schema entries come from (JSON file or remote server)

mod builtin;
mod config;
mod error;
mod overrides;
mod runtime;
mod schema;
mod source;

pub use builtin::BuiltinKind;
pub use config::{CONFIG_FILE_NAME, Config, ConfigFile, OutputConfig, SourceConfig};
pub use error::{Error, Result, SourceContext};
pub use overrides::{NameOverrideMap, OverrideValue, parse_override_arg};
pub use runtime::Runtime;
pub use schema::{FieldDescriptor, FieldKind, SchemaEntry, parse_schema_str};
pub use source::{FileSource, SchemaSource, ServerSource};
