//! Named export lists.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// `export { a, b };`, or `export {};` when empty so the file stays a module.
#[derive(Debug, Clone, Default)]
pub struct Export {
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    fn statement(&self) -> String {
        match self.named.as_slice() {
            [] => "export {};".to_string(),
            names => format!("export {{ {} }};", names.join(", ")),
        }
    }

    pub fn build(&self) -> String {
        CodeBuilder::typescript().line(&self.statement()).build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_classes() {
        let export = Export::new().named_all(["AppUser", "Post", "Comment"]);
        assert_eq!(export.build(), "export { AppUser, Post, Comment };\n");
    }

    #[test]
    fn test_export_empty() {
        assert_eq!(Export::new().build(), "export {};\n");
    }
}
