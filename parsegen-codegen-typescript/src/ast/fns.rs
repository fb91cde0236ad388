//! Constructor and arrow function builders.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter with an optional type and default value.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn render(&self) -> String {
        let mut out = self.name.clone();
        if let Some(ty) = &self.ty {
            out.push_str(": ");
            out.push_str(ty);
        }
        if let Some(value) = &self.default {
            out.push_str(" = ");
            out.push_str(value);
        }
        out
    }
}

fn params_list(params: &[Param]) -> String {
    params
        .iter()
        .map(Param::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A class constructor.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    params: Vec<Param>,
    body: Vec<String>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Add a line to the constructor body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Build the constructor as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("constructor({}) {{", params_list(&self.params)),
            self.body.iter().cloned().map(CodeFragment::Line).collect(),
        )]
    }
}

/// An arrow function bound to a const (`export const f = () => { ... };`).
#[derive(Debug, Clone)]
pub struct ArrowFn {
    name: String,
    params: Vec<Param>,
    body: Vec<String>,
    exported: bool,
}

impl ArrowFn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: Vec::new(),
            exported: true,
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for ArrowFn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let head = format!(
            "{}const {} = ({}) => {{",
            export,
            self.name,
            params_list(&self.params)
        );

        if self.body.is_empty() {
            return vec![CodeFragment::Line(format!("{}}};", head))];
        }
        vec![CodeFragment::Block {
            header: head,
            body: self.body.iter().cloned().map(CodeFragment::Line).collect(),
            close: Some("};".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_with_default_param() {
        let c = Constructor::new()
            .param(Param::new("ACL").ty("Parse.ACL").default("new Parse.ACL()"))
            .body_line("super(\"Team\", ACL);")
            .build();
        assert_eq!(
            c,
            "constructor(ACL: Parse.ACL = new Parse.ACL()) {\n  super(\"Team\", ACL);\n}\n"
        );
    }

    #[test]
    fn test_constructor_without_params() {
        let c = Constructor::new()
            .body_line("super(Session.DEFAULT_VALUES);")
            .build();
        assert!(c.starts_with("constructor() {\n"));
    }

    #[test]
    fn test_arrow_fn() {
        let f = ArrowFn::new("registerAll")
            .body_line("Parse.Object.registerSubclass(\"Post\", Post);")
            .build();
        assert_eq!(
            f,
            "export const registerAll = () => {\n  Parse.Object.registerSubclass(\"Post\", Post);\n};\n"
        );
    }

    #[test]
    fn test_empty_arrow_fn() {
        let f = ArrowFn::new("noop").private().param(Param::new("x")).build();
        assert_eq!(f, "const noop = (x) => {};\n");
    }
}
