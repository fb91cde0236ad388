//! Type expressions and default values.

use serde::Serialize;

/// Runtime base class a generated class extends or a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseClass {
    /// The generic record base.
    Object,
    /// The account built-in.
    User,
    /// The role built-in.
    Role,
    /// The session built-in.
    Session,
}

impl BaseClass {
    /// Get the fully qualified runtime name (e.g., `Parse.User`).
    pub fn runtime_name(&self) -> &'static str {
        match self {
            BaseClass::Object => "Parse.Object",
            BaseClass::User => "Parse.User",
            BaseClass::Role => "Parse.Role",
            BaseClass::Session => "Parse.Session",
        }
    }
}

/// Reference to a record type, optionally parameterized by its attributes interface.
///
/// Unmodified built-ins have no generated interface and stay bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRef {
    pub base: BaseClass,
    pub attributes: Option<String>,
}

impl ClassRef {
    /// A bare reference to a runtime base class.
    pub fn bare(base: BaseClass) -> Self {
        Self {
            base,
            attributes: None,
        }
    }

    /// A reference parameterized by a generated attributes interface.
    pub fn parameterized(base: BaseClass, attributes: impl Into<String>) -> Self {
        Self {
            base,
            attributes: Some(attributes.into()),
        }
    }
}

/// Target-agnostic type of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    Number,
    String,
    Boolean,
    Date,
    Pointer {
        target: ClassRef,
        nullable: bool,
    },
    Relation {
        owner: ClassRef,
        target: ClassRef,
        nullable: bool,
    },
    Array,
    Object,
    File {
        nullable: bool,
    },
    GeoPoint,
    Polygon,
    /// Untyped fallback for unrecognized field kinds.
    Any,
}

impl TypeExpr {
    /// Returns true if the rendered type carries a nullability marker.
    pub fn is_nullable(&self) -> bool {
        match self {
            TypeExpr::Pointer { nullable, .. }
            | TypeExpr::Relation { nullable, .. }
            | TypeExpr::File { nullable } => *nullable,
            _ => false,
        }
    }

    /// Strip the nullability marker, leaving every other type untouched.
    pub fn non_null(self) -> Self {
        match self {
            TypeExpr::Pointer { target, .. } => TypeExpr::Pointer {
                target,
                nullable: false,
            },
            TypeExpr::Relation { owner, target, .. } => TypeExpr::Relation {
                owner,
                target,
                nullable: false,
            },
            TypeExpr::File { .. } => TypeExpr::File { nullable: false },
            other => other,
        }
    }
}

/// Default value synthesized for a required attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    /// A text literal, rendered quoted.
    Text(String),
    /// A schema-supplied literal, rendered verbatim as JSON.
    Literal(String),
    Zero,
    False,
    EmptyArray,
    EmptyObject,
    Null,
    /// The epoch date.
    Epoch,
    /// A date at the given ISO-8601 instant.
    DateIso(String),
    /// A date at the given milliseconds since the epoch.
    DateMillis(String),
    /// The geographic origin point.
    GeoOrigin,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_ref() -> ClassRef {
        ClassRef::parameterized(BaseClass::Object, "PostAttributes")
    }

    #[test]
    fn test_runtime_name() {
        assert_eq!(BaseClass::Object.runtime_name(), "Parse.Object");
        assert_eq!(BaseClass::User.runtime_name(), "Parse.User");
        assert_eq!(BaseClass::Role.runtime_name(), "Parse.Role");
        assert_eq!(BaseClass::Session.runtime_name(), "Parse.Session");
    }

    #[test]
    fn test_is_nullable() {
        assert!(
            TypeExpr::Pointer {
                target: post_ref(),
                nullable: true
            }
            .is_nullable()
        );
        assert!(TypeExpr::File { nullable: true }.is_nullable());
        assert!(!TypeExpr::File { nullable: false }.is_nullable());
        assert!(!TypeExpr::String.is_nullable());
        assert!(!TypeExpr::Any.is_nullable());
    }

    #[test]
    fn test_non_null_strips_marker() {
        let relation = TypeExpr::Relation {
            owner: post_ref(),
            target: ClassRef::bare(BaseClass::User),
            nullable: true,
        };

        let stripped = relation.non_null();

        assert!(!stripped.is_nullable());
        assert_eq!(
            stripped,
            TypeExpr::Relation {
                owner: post_ref(),
                target: ClassRef::bare(BaseClass::User),
                nullable: false,
            }
        );
    }

    #[test]
    fn test_non_null_keeps_scalars() {
        assert_eq!(TypeExpr::Number.non_null(), TypeExpr::Number);
        assert_eq!(TypeExpr::GeoPoint.non_null(), TypeExpr::GeoPoint);
    }

    #[test]
    fn test_serialize_type_expr() {
        let json = serde_json::to_value(TypeExpr::File { nullable: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "file", "nullable": true }));
    }

    #[test]
    fn test_serialize_default_value() {
        let json = serde_json::to_value(DefaultValue::Text("draft".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "text", "value": "draft" }));

        let json = serde_json::to_value(DefaultValue::Zero).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "zero" }));
    }
}
