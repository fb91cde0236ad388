//! JavaScript runtimes the generated code can target.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Target runtime, selecting which Parse SDK entry point is imported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Runtime {
    /// Node.js (`parse/node`)
    #[default]
    Node,
    /// Browsers (`parse`)
    Browser,
    /// React Native (`parse/react-native`)
    ReactNative,
}

impl Runtime {
    /// All runtimes, in prompt order.
    pub const ALL: [Runtime; 3] = [Runtime::Node, Runtime::Browser, Runtime::ReactNative];

    /// Returns the runtime identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Runtime::Node => "node",
            Runtime::Browser => "browser",
            Runtime::ReactNative => "react-native",
        }
    }

    /// Module specifier of the Parse SDK for this runtime.
    pub fn import_source(&self) -> &'static str {
        match self {
            Runtime::Node => "parse/node",
            Runtime::Browser => "parse",
            Runtime::ReactNative => "parse/react-native",
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" | "nodejs" => Ok(Runtime::Node),
            "browser" | "web" => Ok(Runtime::Browser),
            "react-native" | "reactnative" | "rn" => Ok(Runtime::ReactNative),
            _ => Err(format!(
                "unknown runtime '{}', expected 'node', 'browser' or 'react-native'",
                s
            )),
        }
    }
}
