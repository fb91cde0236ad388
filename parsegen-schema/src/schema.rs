//! Schema entries as returned by the Parse Server `/schemas` endpoint.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{Result, SourceContext};

/// Field type vocabulary recognized by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FieldKind {
    Number,
    String,
    Boolean,
    Date,
    Pointer,
    Relation,
    Array,
    Object,
    File,
    GeoPoint,
    Polygon,
    /// Any type outside the vocabulary, kept verbatim for diagnostics.
    Unknown(String),
}

impl FieldKind {
    /// Returns the schema spelling of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Number => "Number",
            FieldKind::String => "String",
            FieldKind::Boolean => "Boolean",
            FieldKind::Date => "Date",
            FieldKind::Pointer => "Pointer",
            FieldKind::Relation => "Relation",
            FieldKind::Array => "Array",
            FieldKind::Object => "Object",
            FieldKind::File => "File",
            FieldKind::GeoPoint => "GeoPoint",
            FieldKind::Polygon => "Polygon",
            FieldKind::Unknown(other) => other,
        }
    }

    /// Returns true for kinds that reference another record kind.
    pub fn needs_target(&self) -> bool {
        matches!(self, FieldKind::Pointer | FieldKind::Relation)
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Number" => FieldKind::Number,
            "String" => FieldKind::String,
            "Boolean" => FieldKind::Boolean,
            "Date" => FieldKind::Date,
            "Pointer" => FieldKind::Pointer,
            "Relation" => FieldKind::Relation,
            "Array" => FieldKind::Array,
            "Object" => FieldKind::Object,
            "File" => FieldKind::File,
            "GeoPoint" => FieldKind::GeoPoint,
            "Polygon" => FieldKind::Polygon,
            _ => FieldKind::Unknown(s),
        }
    }
}

impl From<&str> for FieldKind {
    fn from(s: &str) -> Self {
        FieldKind::from(s.to_string())
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field of a schema entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Target kind identifier, only meaningful for Pointer and Relation.
    #[serde(default)]
    pub target_class: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Literal default, only used when the field is required.
    #[serde(default)]
    pub default_value: Option<Value>,
}

impl FieldDescriptor {
    /// Create an optional field of the given kind.
    pub fn new(kind: impl Into<FieldKind>) -> Self {
        Self {
            kind: kind.into(),
            target_class: None,
            required: false,
            default_value: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the target kind identifier.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target_class = Some(target.into());
        self
    }

    /// Set the literal default.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// One record kind with its fields in declaration order.
///
/// Other keys of the server response (`classLevelPermissions`, `indexes`)
/// are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    pub class_name: String,
    #[serde(default)]
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl SchemaEntry {
    /// Create an entry with no fields.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Append a field, keeping insertion order.
    pub fn field(mut self, name: impl Into<String>, field: FieldDescriptor) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

#[derive(Deserialize)]
struct SchemaResponse {
    results: Vec<SchemaEntry>,
}

/// Parse a schema document.
///
/// Accepts either a bare array of entries or a `/schemas` response object
/// (`{"results": [...]}`).
pub fn parse_schema_str(content: &str, filename: &str) -> Result<Vec<SchemaEntry>> {
    let ctx = SourceContext::new(content, filename);
    let is_list = content.trim_start().starts_with('[');

    let parsed = if is_list {
        serde_json::from_str::<Vec<SchemaEntry>>(content)
    } else {
        serde_json::from_str::<SchemaResponse>(content).map(|response| response.results)
    };

    parsed.map_err(|e| ctx.json_error(e))
}
