//! Indented text output.

use super::{CodeFragment, Renderable};

/// Indentation unit for generated code, in spaces per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// 2-space indentation, as emitted for TypeScript and JavaScript.
    pub const TYPESCRIPT: Self = Self::spaces(2);

    pub const fn spaces(width: usize) -> Self {
        Self(width)
    }

    fn write(&self, buffer: &mut String, depth: usize) {
        buffer.extend(std::iter::repeat_n(' ', self.0 * depth));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

/// Accumulates lines at the current indentation depth.
///
/// ```
/// use parsegen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.push_fragment(&CodeFragment::braced(
///     "export interface PostAttributes {",
///     vec![CodeFragment::line("title: string;")],
/// ));
///
/// assert_eq!(builder.build(), "export interface PostAttributes {\n  title: string;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add one line, consuming the builder.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.indent.write(&mut self.buffer, self.depth);
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Emit every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.push_fragment(&fragment);
        }
        self
    }

    pub fn push_fragment(&mut self, fragment: &CodeFragment) -> &mut Self {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(close);
                }
            }
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::JsDoc(text) => {
                self.push_line(&format!("/** {} */", text));
            }
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn nested(&mut self, body: &[CodeFragment]) {
        self.depth += 1;
        for fragment in body {
            self.push_fragment(fragment);
        }
        self.depth -= 1;
    }
}
