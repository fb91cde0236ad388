//! Class descriptors produced by record translation.

use serde::Serialize;

use crate::{BaseClass, DefaultValue, TypeExpr};

/// Structured description of one emittable record kind.
///
/// Built fresh per run by the translator and never mutated afterwards; every
/// emitter reads the same descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDescriptor {
    /// The schema kind identifier (e.g., `_User`, `Post`).
    pub kind: String,
    /// The externally visible class name.
    pub name: String,
    /// The runtime class this one extends.
    pub base: BaseClass,
    /// Attributes in schema field order.
    pub attributes: Vec<Attribute>,
    /// Default values for required attributes, in schema field order.
    pub defaults: Vec<DefaultEntry>,
    pub constructor: ConstructorShape,
}

impl ClassDescriptor {
    /// Name of the generated attributes interface (e.g., `PostAttributes`).
    pub fn attributes_interface(&self) -> String {
        format!("{}Attributes", self.name)
    }
}

/// One attribute of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub ty: TypeExpr,
    pub optional: bool,
}

impl Attribute {
    /// Create an attribute. Required attributes never carry a nullable type.
    pub fn new(name: impl Into<String>, ty: TypeExpr, optional: bool) -> Self {
        let ty = if optional { ty } else { ty.non_null() };
        Self {
            name: name.into(),
            ty,
            optional,
        }
    }
}

/// Entry of a static default-value table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultEntry {
    pub name: String,
    pub value: DefaultValue,
}

impl DefaultEntry {
    pub fn new(name: impl Into<String>, value: DefaultValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Constructor shape of a generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorShape {
    /// Partial attributes merged over defaults, no class name argument.
    Account,
    /// Optional access-control list, passed with the class name.
    Role,
    /// No arguments, static defaults only.
    Session,
    /// Partial attributes merged over defaults, passed with the class name.
    Generic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassRef;

    fn pointer(nullable: bool) -> TypeExpr {
        TypeExpr::Pointer {
            target: ClassRef::bare(BaseClass::User),
            nullable,
        }
    }

    #[test]
    fn test_required_attribute_is_never_nullable() {
        let attr = Attribute::new("author", pointer(true), false);
        assert!(!attr.ty.is_nullable());
        assert!(!attr.optional);
    }

    #[test]
    fn test_optional_attribute_keeps_nullability() {
        let attr = Attribute::new("author", pointer(true), true);
        assert!(attr.ty.is_nullable());
    }

    #[test]
    fn test_attributes_interface() {
        let descriptor = ClassDescriptor {
            kind: "_User".to_string(),
            name: "AppUser".to_string(),
            base: BaseClass::User,
            attributes: Vec::new(),
            defaults: Vec::new(),
            constructor: ConstructorShape::Account,
        };
        assert_eq!(descriptor.attributes_interface(), "AppUserAttributes");
    }
}
