//! Naming Resolver.

use parsegen_ir::{BaseClass, ClassRef};
use parsegen_schema::{BuiltinKind, NameOverrideMap};

/// Decides the visible name of a kind and whether it is emitted.
///
/// A falsy override (`false` or `""`) is treated exactly like an absent one.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    overrides: &'a NameOverrideMap,
}

impl<'a> NameResolver<'a> {
    pub fn new(overrides: &'a NameOverrideMap) -> Self {
        Self { overrides }
    }

    /// The externally visible name of `kind`.
    ///
    /// - overridden built-in: the rename, or the kind identifier for `true`
    /// - other built-in: its runtime base class (e.g., `Parse.User`)
    /// - user-defined: `kind` unchanged
    pub fn resolve_name(&self, kind: &str) -> String {
        match BuiltinKind::from_identifier(kind) {
            Some(builtin) => match self.active_override(builtin) {
                Some(rename) => rename.unwrap_or(kind).to_string(),
                None => Self::base_class_for(kind).runtime_name().to_string(),
            },
            None => kind.to_string(),
        }
    }

    /// The runtime class a generated class for `kind` extends.
    ///
    /// Independent of any override.
    pub fn base_class_for(kind: &str) -> BaseClass {
        match BuiltinKind::from_identifier(kind) {
            Some(BuiltinKind::User) => BaseClass::User,
            Some(BuiltinKind::Role) => BaseClass::Role,
            Some(BuiltinKind::Session) => BaseClass::Session,
            None => BaseClass::Object,
        }
    }

    /// False only for built-ins without a truthy override.
    pub fn should_emit(&self, kind: &str) -> bool {
        match BuiltinKind::from_identifier(kind) {
            Some(builtin) => self.overrides.is_active(builtin),
            None => true,
        }
    }

    /// Reference to `kind` as used inside pointer and relation types.
    ///
    /// Parameterized by the attributes interface only when a class is
    /// generated for `kind`.
    pub fn class_ref(&self, kind: &str) -> ClassRef {
        let base = Self::base_class_for(kind);
        if self.should_emit(kind) {
            ClassRef::parameterized(base, format!("{}Attributes", self.resolve_name(kind)))
        } else {
            ClassRef::bare(base)
        }
    }

    /// `Some(rename)` for a truthy override, where `rename` is `None` for `true`.
    fn active_override(&self, builtin: BuiltinKind) -> Option<Option<&'a str>> {
        self.overrides
            .get(builtin)
            .filter(|value| value.is_truthy())
            .map(|value| value.rename())
    }
}

#[cfg(test)]
mod tests {
    use parsegen_schema::OverrideValue;

    use super::*;

    #[test]
    fn test_user_defined_kind() {
        let overrides = NameOverrideMap::new();
        let resolver = NameResolver::new(&overrides);

        assert_eq!(resolver.resolve_name("Post"), "Post");
        assert!(resolver.should_emit("Post"));
        assert_eq!(NameResolver::base_class_for("Post"), BaseClass::Object);
    }

    #[test]
    fn test_builtin_without_override() {
        let overrides = NameOverrideMap::new();
        let resolver = NameResolver::new(&overrides);

        for builtin in BuiltinKind::ALL {
            assert!(!resolver.should_emit(builtin.identifier()));
        }
        assert_eq!(resolver.resolve_name("_User"), "Parse.User");
        assert_eq!(resolver.resolve_name("_Role"), "Parse.Role");
        assert_eq!(resolver.resolve_name("_Session"), "Parse.Session");
    }

    #[test]
    fn test_builtin_renamed() {
        let overrides = NameOverrideMap::new().with(BuiltinKind::User, "AppUser");
        let resolver = NameResolver::new(&overrides);

        assert_eq!(resolver.resolve_name("_User"), "AppUser");
        assert!(resolver.should_emit("_User"));
        assert_eq!(NameResolver::base_class_for("_User"), BaseClass::User);
    }

    #[test]
    fn test_builtin_flag_true_keeps_identifier() {
        let overrides = NameOverrideMap::new().with(BuiltinKind::Session, true);
        let resolver = NameResolver::new(&overrides);

        assert_eq!(resolver.resolve_name("_Session"), "_Session");
        assert!(resolver.should_emit("_Session"));
    }

    #[test]
    fn test_falsy_override_suppresses() {
        let overrides = NameOverrideMap::new()
            .with(BuiltinKind::Role, false)
            .with(BuiltinKind::User, OverrideValue::Name(String::new()));
        let resolver = NameResolver::new(&overrides);

        assert!(!resolver.should_emit("_Role"));
        assert!(!resolver.should_emit("_User"));
        assert_eq!(resolver.resolve_name("_Role"), "Parse.Role");
        assert_eq!(resolver.resolve_name("_User"), "Parse.User");
    }

    #[test]
    fn test_overrides_do_not_leak_to_user_kinds() {
        let overrides = NameOverrideMap::new().with(BuiltinKind::User, "Post");
        let resolver = NameResolver::new(&overrides);

        assert_eq!(resolver.resolve_name("Post"), "Post");
        assert_eq!(NameResolver::base_class_for("Post"), BaseClass::Object);
    }

    #[test]
    fn test_class_ref() {
        let overrides = NameOverrideMap::new().with(BuiltinKind::Role, "Team");
        let resolver = NameResolver::new(&overrides);

        assert_eq!(resolver.class_ref("_User"), ClassRef::bare(BaseClass::User));
        assert_eq!(
            resolver.class_ref("_Role"),
            ClassRef::parameterized(BaseClass::Role, "TeamAttributes")
        );
        assert_eq!(
            resolver.class_ref("Post"),
            ClassRef::parameterized(BaseClass::Object, "PostAttributes")
        );
    }
}
