//! TypeScript declaration generator for parsegen.
//!
//! Renders translated [`ClassDescriptor`](parsegen_ir::ClassDescriptor)s as
//! TypeScript for the Parse JavaScript SDK.
//!
//! # Usage
//!
//! ```ignore
//! use parsegen_codegen::pipeline::Pipeline;
//! use parsegen_codegen_typescript::{Generator, LanguageCodegen, OutputPaths};
//!
//! let ctx = Pipeline::new().run(entries, overrides)?;
//! let generator = Generator::from_context(ctx, OutputPaths::default(), Runtime::Node);
//!
//! // Preview files without writing
//! let files = generator.preview(Path::new("."));
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! - attributes file - `<Name>Attributes` interfaces and serializable helper types
//! - class file - `Parse.Object` subclasses, `registerAll()` and named exports
//! - declarations file - interface merges onto the SDK base classes
//! - documentation file - JSDoc `@typedef`s for plain JavaScript

mod code_file;
mod generator;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use generator::{Generator, OutputPaths};
pub use parsegen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use type_mapper::TypeScriptTypeMapper;
