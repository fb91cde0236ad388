//! TypeScript interface builder.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript interfaces.
///
/// Members are pre-rendered lines such as `title?: string;`.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    extends: Option<String>,
    members: Vec<String>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            members: Vec::new(),
            exported: true,
        }
    }

    /// Merge another type into this interface.
    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends = Some(ty.into());
        self
    }

    /// Add a member line.
    pub fn member(mut self, line: impl Into<String>) -> Self {
        self.members.push(line.into());
        self
    }

    /// Add member lines from an iterator.
    pub fn members(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.members.extend(lines);
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        match &self.extends {
            Some(ty) => format!("{}interface {} extends {}", export, self.name, ty),
            None => format!("{}interface {}", export, self.name),
        }
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.members.is_empty() {
            vec![CodeFragment::Line(format!("{} {{}}", self.header()))]
        } else {
            vec![CodeFragment::braced(
                format!("{} {{", self.header()),
                self.members.iter().cloned().map(CodeFragment::Line).collect(),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        let i = Interface::new("EmptyAttributes").build();
        assert_eq!(i, "export interface EmptyAttributes {}\n");
    }

    #[test]
    fn test_interface_with_members() {
        let i = Interface::new("PostAttributes")
            .member("title: string;")
            .member("author?: Parse.User | null;")
            .build();
        assert_eq!(
            i,
            "export interface PostAttributes {\n  title: string;\n  author?: Parse.User | null;\n}\n"
        );
    }

    #[test]
    fn test_extends_without_body() {
        let i = Interface::new("Post")
            .extends("Parse.Object<PostAttributes>")
            .build();
        assert_eq!(
            i,
            "export interface Post extends Parse.Object<PostAttributes> {}\n"
        );
    }

    #[test]
    fn test_private_interface() {
        let i = Interface::new("Internal").private().member("x: number;").build();
        assert!(!i.contains("export"));
        assert!(i.starts_with("interface Internal {"));
    }
}
