//! TypeScript AST builders for generating declarations, classes, imports, and exports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod exports;
mod fns;
mod imports;
mod interface;
mod jsdoc;
mod objects;
mod types;

pub use class::Class;
pub use exports::Export;
pub use fns::{ArrowFn, Constructor, Param};
pub use imports::Import;
pub use interface::Interface;
pub use jsdoc::Typedef;
pub use objects::{JsObject, StaticProperty};
pub use types::TypeAlias;
