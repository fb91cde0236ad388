//! JavaScript object literal builders.

use parsegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// An object literal built from pre-rendered `key: value` entries.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    entries: Vec<String>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `key: value` entry.
    pub fn entry(mut self, entry: impl Into<String>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Add entries from an iterator.
    pub fn entries(mut self, entries: impl IntoIterator<Item = String>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fragments for `<prefix>{ ... }<suffix>`, one entry per line.
    fn assigned(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if self.entries.is_empty() {
            return vec![CodeFragment::Line(format!("{}{{}}{}", prefix, suffix))];
        }
        vec![CodeFragment::Block {
            header: format!("{}{{", prefix),
            body: self
                .entries
                .iter()
                .map(|e| CodeFragment::Line(format!("{},", e)))
                .collect(),
            close: Some(format!("}}{}", suffix)),
        }]
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.assigned("", "")
    }
}

/// A static class property initialized with an object literal.
#[derive(Debug, Clone)]
pub struct StaticProperty {
    name: String,
    value: JsObject,
}

impl StaticProperty {
    pub fn new(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Build the property as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for StaticProperty {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.value
            .assigned(&format!("static {} = ", self.name), ";")
    }
}
