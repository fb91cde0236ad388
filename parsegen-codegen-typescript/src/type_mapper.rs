//! TypeScript type mapper implementation.

use parsegen_codegen::language::TypeMapper;
use parsegen_core::is_valid_identifier;
use parsegen_ir::{ClassRef, DefaultValue, TypeExpr};

/// Helper sequence type for `Array` fields.
pub const SERIALIZABLE_ARRAY: &str = "SerializableArray";
/// Helper mapping type for `Object` fields.
pub const SERIALIZABLE_OBJECT: &str = "SerializableObject";

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeScriptTypeMapper {
    fn nullable(ty: String, nullable: bool) -> String {
        if nullable { format!("{} | null", ty) } else { ty }
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_type(&self, ty: &TypeExpr) -> String {
        match ty {
            TypeExpr::Number => "number".to_string(),
            TypeExpr::String => "string".to_string(),
            TypeExpr::Boolean => "boolean".to_string(),
            TypeExpr::Date => "Date".to_string(),
            TypeExpr::Pointer { target, nullable } => {
                Self::nullable(self.map_class_ref(target), *nullable)
            }
            TypeExpr::Relation {
                owner,
                target,
                nullable,
            } => Self::nullable(
                format!(
                    "Parse.Relation<{}, {}>",
                    self.map_class_ref(owner),
                    self.map_class_ref(target)
                ),
                *nullable,
            ),
            TypeExpr::Array => SERIALIZABLE_ARRAY.to_string(),
            TypeExpr::Object => SERIALIZABLE_OBJECT.to_string(),
            TypeExpr::File { nullable } => Self::nullable("Parse.File".to_string(), *nullable),
            TypeExpr::GeoPoint => "Parse.GeoPoint".to_string(),
            TypeExpr::Polygon => "Parse.Polygon".to_string(),
            TypeExpr::Any => "any".to_string(),
        }
    }

    fn map_class_ref(&self, class_ref: &ClassRef) -> String {
        let base = class_ref.base.runtime_name();
        match &class_ref.attributes {
            Some(attributes) => format!("{}<{}>", base, attributes),
            None => base.to_string(),
        }
    }

    fn map_default(&self, value: &DefaultValue) -> String {
        match value {
            DefaultValue::Text(text) => quote(text),
            DefaultValue::Literal(json) => json.clone(),
            DefaultValue::Zero => "0".to_string(),
            DefaultValue::False => "false".to_string(),
            DefaultValue::EmptyArray => "[]".to_string(),
            DefaultValue::EmptyObject => "{}".to_string(),
            DefaultValue::Null => "null".to_string(),
            DefaultValue::Epoch => "new Date(0)".to_string(),
            DefaultValue::DateIso(iso) => format!("new Date({})", quote(iso)),
            DefaultValue::DateMillis(millis) => format!("new Date({})", millis),
            DefaultValue::GeoOrigin => "new Parse.GeoPoint(0, 0)".to_string(),
        }
    }

    fn map_key(&self, name: &str) -> String {
        if is_valid_identifier(name) {
            name.to_string()
        } else {
            quote(name)
        }
    }
}

/// A double-quoted string literal with JSON escaping.
fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}
