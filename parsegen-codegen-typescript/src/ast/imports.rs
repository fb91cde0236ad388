//! `import` statements.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// One `import` statement from a single module.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Bind the module's default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Emit `import type`, erased at compile time.
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    fn statement(&self) -> String {
        let mut bindings: Vec<String> = self.default.iter().cloned().collect();
        if !self.named.is_empty() {
            bindings.push(format!("{{ {} }}", self.named.join(", ")));
        }
        if bindings.is_empty() {
            return format!("import \"{}\";", self.from);
        }

        let keyword = if self.type_only { "import type" } else { "import" };
        format!("{} {} from \"{}\";", keyword, bindings.join(", "), self.from)
    }

    pub fn build(&self) -> String {
        CodeBuilder::typescript().line(&self.statement()).build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}
