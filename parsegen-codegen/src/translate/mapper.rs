//! Field Type Mapper.

use parsegen_ir::{DefaultValue, TypeExpr};
use parsegen_schema::{FieldDescriptor, FieldKind};
use serde_json::Value;
use tracing::warn;

use super::{NameResolver, TranslateError};
use crate::pipeline::Diagnostic;

/// Result of mapping one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    /// Declared type; never nullable when the field is required.
    pub ty: TypeExpr,
    pub optional: bool,
    /// Default value, present exactly when the field is required.
    pub default: Option<DefaultValue>,
}

/// Maps field descriptors to type expressions and defaults.
#[derive(Debug, Clone, Copy)]
pub struct FieldMapper<'a> {
    resolver: NameResolver<'a>,
}

impl<'a> FieldMapper<'a> {
    pub fn new(resolver: NameResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Map field `name` of kind `owner`.
    ///
    /// Unrecognized field kinds degrade to [`TypeExpr::Any`] and record a
    /// warning in `diagnostics`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::MissingTarget`] for a Pointer or Relation
    /// without a target class.
    pub fn map_field(
        &self,
        owner: &str,
        name: &str,
        field: &FieldDescriptor,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<MappedField, TranslateError> {
        let ty = match &field.kind {
            FieldKind::Number => TypeExpr::Number,
            FieldKind::String => TypeExpr::String,
            FieldKind::Boolean => TypeExpr::Boolean,
            FieldKind::Date => TypeExpr::Date,
            FieldKind::Pointer => TypeExpr::Pointer {
                target: self.resolver.class_ref(target_of(owner, name, field)?),
                nullable: true,
            },
            FieldKind::Relation => TypeExpr::Relation {
                owner: self.resolver.class_ref(owner),
                target: self.resolver.class_ref(target_of(owner, name, field)?),
                nullable: true,
            },
            FieldKind::Array => TypeExpr::Array,
            FieldKind::Object => TypeExpr::Object,
            FieldKind::File => TypeExpr::File { nullable: true },
            FieldKind::GeoPoint => TypeExpr::GeoPoint,
            FieldKind::Polygon => TypeExpr::Polygon,
            FieldKind::Unknown(other) => {
                warn!(class = owner, field = name, kind = %other, "unknown field type, using any");
                diagnostics.push(
                    Diagnostic::warning(
                        "translate",
                        format!("unknown field type '{}', falling back to any", other),
                    )
                    .at(format!("{}.{}", owner, name)),
                );
                TypeExpr::Any
            }
        };

        if !field.required {
            return Ok(MappedField {
                ty,
                optional: true,
                default: None,
            });
        }

        Ok(MappedField {
            ty: ty.non_null(),
            optional: false,
            default: Some(default_for(
                &field.kind,
                field.default_value.as_ref(),
                &format!("{}.{}", owner, name),
                diagnostics,
            )),
        })
    }
}

fn target_of<'f>(
    owner: &str,
    name: &str,
    field: &'f FieldDescriptor,
) -> Result<&'f str, TranslateError> {
    field
        .target_class
        .as_deref()
        .filter(|target| !target.is_empty())
        .ok_or_else(|| TranslateError::MissingTarget {
            class: owner.to_string(),
            field: name.to_string(),
            kind: field.kind.to_string(),
        })
}

/// Default value of a required field at `location`.
fn default_for(
    kind: &FieldKind,
    literal: Option<&Value>,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> DefaultValue {
    match (kind, literal) {
        (FieldKind::String, Some(Value::String(text))) => DefaultValue::Text(text.clone()),
        (FieldKind::String, Some(other)) => DefaultValue::Text(other.to_string()),
        (FieldKind::String, None) => DefaultValue::Text(String::new()),
        (FieldKind::GeoPoint, _) => DefaultValue::GeoOrigin,
        (FieldKind::Date, Some(value)) => match (date_iso(value), value) {
            (Some(iso), _) => DefaultValue::DateIso(iso.to_string()),
            (None, Value::Number(millis)) => DefaultValue::DateMillis(millis.to_string()),
            (None, other) => {
                warn!(field = location, value = %other, "unusable date default, using epoch");
                diagnostics.push(
                    Diagnostic::warning(
                        "translate",
                        format!("date default {} is not a date, falling back to epoch", other),
                    )
                    .at(location),
                );
                DefaultValue::Epoch
            }
        },
        (_, Some(value)) => DefaultValue::Literal(value.to_string()),
        (_, None) => zero_value(kind),
    }
}

/// Static per-kind zero value.
fn zero_value(kind: &FieldKind) -> DefaultValue {
    match kind {
        FieldKind::Number => DefaultValue::Zero,
        FieldKind::Boolean => DefaultValue::False,
        FieldKind::Date => DefaultValue::Epoch,
        FieldKind::Array => DefaultValue::EmptyArray,
        FieldKind::Object => DefaultValue::EmptyObject,
        FieldKind::String => DefaultValue::Text(String::new()),
        FieldKind::GeoPoint => DefaultValue::GeoOrigin,
        FieldKind::Pointer
        | FieldKind::Relation
        | FieldKind::File
        | FieldKind::Polygon
        | FieldKind::Unknown(_) => DefaultValue::Null,
    }
}

/// ISO string of a `{"__type": "Date", "iso": ...}` object or a bare string.
fn date_iso(value: &Value) -> Option<&str> {
    match value {
        Value::String(iso) => Some(iso),
        Value::Object(map) if map.get("__type").and_then(Value::as_str) == Some("Date") => {
            map.get("iso").and_then(Value::as_str)
        }
        _ => None,
    }
}
