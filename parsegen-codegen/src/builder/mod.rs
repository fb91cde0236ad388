//! Code generation building blocks.
//!
//! AST nodes describe themselves as [`CodeFragment`]s through [`Renderable`];
//! a [`CodeBuilder`] lays fragments out as indented text.

mod code_builder;
mod fragment;

pub use code_builder::{CodeBuilder, Indent};
pub use fragment::{CodeFragment, Renderable};
