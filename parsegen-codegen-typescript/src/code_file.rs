//! CodeFile abstraction for structured TypeScript file generation.
//!
//! Provides a high-level API for generating TypeScript files with a leading
//! comment header, organized imports, body content, and exports sections.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a TypeScript file.
///
/// Organizes code into four sections: header comments, imports, body, and
/// exports. Sections are separated by a blank line, as are body elements.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .header(GENERATED_HEADER)
///     .import(Import::new("parse/node").default("Parse"))
///     .add(class)
///     .export(Export::new().named("Post"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Vec<String>,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header comment line.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Add an export statement.
    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut wrote_section = false;

        if !self.header.is_empty() {
            for line in &self.header {
                builder.push_line(line);
            }
            wrote_section = true;
        }

        if !self.imports.is_empty() {
            if wrote_section {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            wrote_section = true;
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if wrote_section || i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.push_fragment(fragment);
            }
        }
        wrote_section |= !self.body.is_empty();

        if !self.exports.is_empty() {
            if wrote_section {
                builder.push_blank();
            }
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
            && self.imports.is_empty()
            && self.body.is_empty()
            && self.exports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Interface, TypeAlias};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_only() {
        let file = CodeFile::new().header("// one").header("// two");
        assert_eq!(file.render(), "// one\n// two\n");
    }

    #[test]
    fn test_body_only() {
        let file = CodeFile::new().add(TypeAlias::new("Id", "string"));
        assert_eq!(file.render(), "export type Id = string;\n");
    }

    #[test]
    fn test_full_file() {
        let file = CodeFile::new()
            .header("// header")
            .import(Import::new("parse/node").default("Parse"))
            .add(Interface::new("Post").extends("Parse.Object"))
            .export(Export::new().named("Post"));

        assert_eq!(
            file.render(),
            "// header\n\nimport Parse from \"parse/node\";\n\nexport interface Post extends Parse.Object {}\n\nexport { Post };\n"
        );
    }

    #[test]
    fn test_blank_lines_between_body() {
        let file = CodeFile::new()
            .add(TypeAlias::new("A", "number"))
            .add(TypeAlias::new("B", "string"));

        assert_eq!(
            file.render(),
            "export type A = number;\n\nexport type B = string;\n"
        );
    }
}
