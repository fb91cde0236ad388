//! Built-in record kinds.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Record kinds declared by the Parse SDK itself.
///
/// Membership is closed: every other kind identifier is user-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum BuiltinKind {
    /// The account kind.
    #[serde(rename = "_User")]
    User,
    /// The role kind.
    #[serde(rename = "_Role")]
    Role,
    /// The session kind.
    #[serde(rename = "_Session")]
    Session,
}

impl BuiltinKind {
    /// All built-in kinds, in declaration order.
    pub const ALL: [BuiltinKind; 3] = [BuiltinKind::User, BuiltinKind::Role, BuiltinKind::Session];

    /// Returns the schema kind identifier (e.g., `_User`).
    pub fn identifier(&self) -> &'static str {
        match self {
            BuiltinKind::User => "_User",
            BuiltinKind::Role => "_Role",
            BuiltinKind::Session => "_Session",
        }
    }

    /// Look up a built-in by its exact kind identifier.
    pub fn from_identifier(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.identifier() == kind)
    }

    /// Returns true if `kind` names a built-in.
    pub fn is_builtin(kind: &str) -> bool {
        Self::from_identifier(kind).is_some()
    }
}

impl fmt::Display for BuiltinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for BuiltinKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| {
            format!(
                "unknown built-in class '{}', expected one of '_User', '_Role', '_Session'",
                s
            )
        })
    }
}
