//! TypeScript type alias builder.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `type` aliases, either a single expression or a union.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    variants: Vec<String>,
    exported: bool,
}

impl TypeAlias {
    /// Alias for a single type expression.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: vec![ty.into()],
            exported: true,
        }
    }

    /// Alias for a union, rendered one variant per line.
    pub fn union(name: impl Into<String>, variants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the alias as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        match self.variants.as_slice() {
            [single] => vec![CodeFragment::Line(format!(
                "{}type {} = {};",
                export, self.name, single
            ))],
            variants => {
                let last = variants.len().saturating_sub(1);
                let body = variants
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let end = if i == last { ";" } else { "" };
                        CodeFragment::Line(format!("| {}{}", v, end))
                    })
                    .collect();
                vec![
                    CodeFragment::Line(format!("{}type {} =", export, self.name)),
                    CodeFragment::Indent(body),
                ]
            }
        }
    }
}
