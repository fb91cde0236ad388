//! Indentation-free description of generated code.

/// One piece of generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line, newline appended.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `header`, then `body` one level deeper, then `close` if any.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments one level deeper, without header or footer.
    Indent(Vec<CodeFragment>),
    /// A single-line `/** ... */` comment.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some("}".to_string()),
        }
    }
}

/// Types that can be rendered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braced() {
        let block = CodeFragment::braced(
            "export interface PostAttributes {",
            vec![CodeFragment::line("title: string;")],
        );

        assert_eq!(
            block,
            CodeFragment::Block {
                header: "export interface PostAttributes {".to_string(),
                body: vec![CodeFragment::Line("title: string;".to_string())],
                close: Some("}".to_string()),
            }
        );
    }
}
