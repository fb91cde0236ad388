//! JSDoc type annotations.

use parsegen_codegen::builder::{CodeFragment, Renderable};

/// A `/** @typedef {Type} Name */` comment.
#[derive(Debug, Clone)]
pub struct Typedef {
    name: String,
    ty: String,
}

impl Typedef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for Typedef {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::JsDoc(format!(
            "@typedef {{{}}} {}",
            self.ty, self.name
        ))]
    }
}
