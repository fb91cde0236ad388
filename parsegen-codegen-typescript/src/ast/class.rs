//! TypeScript class builder.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for class declarations.
///
/// Members are separated by a blank line.
#[derive(Debug, Clone, Default)]
pub struct Class {
    name: String,
    extends: Option<String>,
    members: Vec<Vec<CodeFragment>>,
    exported: bool,
}

impl Class {
    /// A class that is not exported inline (exported later via an export list).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends = Some(ty.into());
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    /// Add a member (property, constructor, ...).
    pub fn member<R: Renderable>(mut self, node: R) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let header = match &self.extends {
            Some(ty) => format!("{}class {} extends {} {{", export, self.name, ty),
            None => format!("{}class {} {{", export, self.name),
        };

        let mut body = Vec::new();
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::Blank);
            }
            body.extend(member.iter().cloned());
        }

        vec![CodeFragment::braced(header, body)]
    }
}
