//! Emission and rename policy for built-in kinds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::BuiltinKind;

/// Value of one override entry: a boolean flag or a replacement name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OverrideValue {
    Flag(bool),
    Name(String),
}

impl OverrideValue {
    /// Falsy values (`false`, `""`) behave exactly like an absent entry.
    pub fn is_truthy(&self) -> bool {
        match self {
            OverrideValue::Flag(flag) => *flag,
            OverrideValue::Name(name) => !name.is_empty(),
        }
    }

    /// Returns the replacement name, if this is a non-empty rename.
    pub fn rename(&self) -> Option<&str> {
        match self {
            OverrideValue::Name(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

impl From<bool> for OverrideValue {
    fn from(flag: bool) -> Self {
        OverrideValue::Flag(flag)
    }
}

impl From<&str> for OverrideValue {
    fn from(name: &str) -> Self {
        OverrideValue::Name(name.to_string())
    }
}

/// Mapping from built-in kinds to their override.
///
/// Keys are restricted to [`BuiltinKind`] by construction; user-defined kinds
/// cannot be overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameOverrideMap {
    entries: BTreeMap<BuiltinKind, OverrideValue>,
}

impl NameOverrideMap {
    /// Create an empty map (every built-in left to the SDK).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, kind: BuiltinKind, value: impl Into<OverrideValue>) -> Self {
        self.insert(kind, value);
        self
    }

    /// Insert or replace the override for `kind`.
    pub fn insert(&mut self, kind: BuiltinKind, value: impl Into<OverrideValue>) {
        self.entries.insert(kind, value.into());
    }

    /// Get the raw override value for `kind`.
    pub fn get(&self, kind: BuiltinKind) -> Option<&OverrideValue> {
        self.entries.get(&kind)
    }

    /// Returns true if `kind` has a truthy override.
    pub fn is_active(&self, kind: BuiltinKind) -> bool {
        self.get(kind).is_some_and(OverrideValue::is_truthy)
    }

    /// Iterate over all entries, including falsy ones.
    pub fn iter(&self) -> impl Iterator<Item = (BuiltinKind, &OverrideValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a map from string keys, returning the first key that is not a built-in.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (&'a str, OverrideValue)>,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            let kind = BuiltinKind::from_identifier(key).ok_or_else(|| key.to_string())?;
            map.insert(kind, value);
        }
        Ok(map)
    }

    /// Overlay `other` on top of this map, entry by entry.
    pub fn merge(&mut self, other: NameOverrideMap) {
        self.entries.extend(other.entries);
    }
}

/// Parse a `KIND=VALUE` command line override.
///
/// `true` and `false` parse as flags, anything else is a rename.
pub fn parse_override_arg(s: &str) -> Result<(BuiltinKind, OverrideValue), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid override '{}', expected KIND=VALUE", s))?;
    let kind: BuiltinKind = key.trim().parse()?;
    let value = match value.trim() {
        "true" => OverrideValue::Flag(true),
        "false" => OverrideValue::Flag(false),
        name => OverrideValue::Name(name.to_string()),
    };
    Ok((kind, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(OverrideValue::Flag(true).is_truthy());
        assert!(!OverrideValue::Flag(false).is_truthy());
        assert!(OverrideValue::from("AppUser").is_truthy());
        assert!(!OverrideValue::from("").is_truthy());
    }

    #[test]
    fn test_rename() {
        assert_eq!(OverrideValue::from("AppUser").rename(), Some("AppUser"));
        assert_eq!(OverrideValue::from("").rename(), None);
        assert_eq!(OverrideValue::Flag(true).rename(), None);
    }

    #[test]
    fn test_is_active() {
        let map = NameOverrideMap::new()
            .with(BuiltinKind::User, "AppUser")
            .with(BuiltinKind::Session, false);

        assert!(map.is_active(BuiltinKind::User));
        assert!(!map.is_active(BuiltinKind::Session));
        assert!(!map.is_active(BuiltinKind::Role));
    }

    #[test]
    fn test_from_entries_rejects_user_kinds() {
        let err = NameOverrideMap::from_entries([
            ("_User", OverrideValue::Flag(true)),
            ("Post", OverrideValue::Flag(true)),
        ])
        .unwrap_err();
        assert_eq!(err, "Post");
    }

    #[test]
    fn test_from_entries() {
        let map = NameOverrideMap::from_entries([("_Role", OverrideValue::from("Team"))]).unwrap();
        assert_eq!(map.get(BuiltinKind::Role), Some(&OverrideValue::from("Team")));
    }

    #[test]
    fn test_merge_overlays() {
        let mut base = NameOverrideMap::new()
            .with(BuiltinKind::User, true)
            .with(BuiltinKind::Role, true);
        base.merge(NameOverrideMap::new().with(BuiltinKind::User, "Member"));

        assert_eq!(base.get(BuiltinKind::User), Some(&OverrideValue::from("Member")));
        assert_eq!(base.get(BuiltinKind::Role), Some(&OverrideValue::Flag(true)));
    }

    #[test]
    fn test_deserialize_values() {
        let flag: OverrideValue = serde_json::from_str("true").unwrap();
        assert_eq!(flag, OverrideValue::Flag(true));
        let name: OverrideValue = serde_json::from_str("\"AppUser\"").unwrap();
        assert_eq!(name, OverrideValue::from("AppUser"));
    }

    #[test]
    fn test_parse_override_arg() {
        assert_eq!(
            parse_override_arg("_User=AppUser").unwrap(),
            (BuiltinKind::User, OverrideValue::from("AppUser"))
        );
        assert_eq!(
            parse_override_arg("_Session=true").unwrap(),
            (BuiltinKind::Session, OverrideValue::Flag(true))
        );
        assert_eq!(
            parse_override_arg("_Role=false").unwrap(),
            (BuiltinKind::Role, OverrideValue::Flag(false))
        );
        assert!(parse_override_arg("_User").is_err());
        assert!(parse_override_arg("Post=true").is_err());
    }
}
