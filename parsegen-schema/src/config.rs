//! `parsegen.toml` configuration.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{Error, NameOverrideMap, OverrideValue, Result, Runtime, SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "parsegen.toml";

/// Where schema entries are loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Local JSON schema file.
    pub schema: Option<PathBuf>,
    /// Parse Server base URL (e.g., `https://example.com/parse`).
    pub server_url: Option<String>,
    pub app_id: Option<String>,
    pub master_key: Option<String>,
}

/// Artifact paths and target runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub runtime: Runtime,
    /// Attributes file, imported by every other artifact.
    pub attributes: Option<PathBuf>,
    /// Runtime class definitions.
    pub classes: Option<PathBuf>,
    /// Pure interface declarations.
    pub declarations: Option<PathBuf>,
    /// JSDoc typedefs for untyped sources.
    pub jsdoc: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    source: SourceConfig,
    #[serde(default)]
    classes: BTreeMap<String, OverrideValue>,
    #[serde(default)]
    output: OutputConfig,
}

/// Parsed and validated `parsegen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub source: SourceConfig,
    /// Built-in overrides from the `[classes]` table.
    pub classes: NameOverrideMap,
    pub output: OutputConfig,
}

impl Config {
    /// Parse configuration from a string (uses "parsegen.toml" as filename)
    pub fn parse_str(content: &str) -> Result<Self> {
        Self::parse_str_with_filename(content, CONFIG_FILE_NAME)
    }

    /// Parse configuration with a custom filename for error reporting
    pub fn parse_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

        let classes = NameOverrideMap::from_entries(
            raw.classes.iter().map(|(key, value)| (key.as_str(), value.clone())),
        )
        .map_err(|key| ctx.unknown_builtin_error(key))?;

        if raw.source.schema.is_some() && raw.source.server_url.is_some() {
            return Err(ctx.validation_error(
                "set either source.schema or source.server_url, not both",
            ));
        }

        Ok(Self {
            source: raw.source,
            classes,
            output: raw.output,
        })
    }

    /// Render a starter configuration for `parsegen init`.
    pub fn starter(runtime: Runtime) -> String {
        format!(
            r#"[source]
schema = "schema.json"
# server_url = "https://example.com/parse"
# app_id = "APP_ID"
# master_key = "MASTER_KEY"

[classes]
# _User = "AppUser"
# _Role = true
# _Session = false

[output]
runtime = "{runtime}"
attributes = "types/parse-class-attributes.d.ts"
classes = "types/parse-classes.ts"
# declarations = "types/parse-declarations.d.ts"
# jsdoc = "types/parse-classes.js"
"#
        )
    }
}

/// Represents a parsegen.toml file with both raw content and parsed config.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a parsegen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::parse_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the file, keeping only the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuiltinKind;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse_str(
            r#"
            [source]
            schema = "schema.json"

            [classes]
            _User = "AppUser"
            _Role = true
            _Session = false

            [output]
            runtime = "browser"
            attributes = "types/attrs.d.ts"
            classes = "src/classes.ts"
            jsdoc = "src/classes.js"
        "#,
        )
        .unwrap();

        assert_eq!(config.source.schema, Some(PathBuf::from("schema.json")));
        assert_eq!(
            config.classes.get(BuiltinKind::User),
            Some(&OverrideValue::from("AppUser"))
        );
        assert!(config.classes.is_active(BuiltinKind::Role));
        assert!(!config.classes.is_active(BuiltinKind::Session));
        assert_eq!(config.output.runtime, Runtime::Browser);
        assert_eq!(config.output.classes, Some(PathBuf::from("src/classes.ts")));
        assert_eq!(config.output.declarations, None);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output.runtime, Runtime::Node);
    }

    #[test]
    fn test_unknown_builtin() {
        let err = Config::parse_str("[classes]\nPost = true\n").unwrap_err();
        match *err {
            Error::UnknownBuiltin { name, span, .. } => {
                assert_eq!(name, "Post");
                assert!(span.is_some());
            }
            other => panic!("expected UnknownBuiltin, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::parse_str("[output]\nformat = \"esm\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_runtime() {
        let err = Config::parse_str("[output]\nruntime = \"deno\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_both_sources_rejected() {
        let err = Config::parse_str(
            "[source]\nschema = \"schema.json\"\nserver_url = \"http://localhost:1337/parse\"\n",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_starter_parses() {
        let config = Config::parse_str(&Config::starter(Runtime::ReactNative)).unwrap();
        assert_eq!(config.output.runtime, Runtime::ReactNative);
        assert!(config.classes.is_empty());
        assert_eq!(
            config.output.attributes,
            Some(PathBuf::from("types/parse-class-attributes.d.ts"))
        );
    }

    #[test]
    fn test_open_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join(CONFIG_FILE_NAME))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[classes]\n_Session = true\n").unwrap();

        let file = ConfigFile::open(&path).unwrap();

        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("_Session"));
        assert!(file.config().classes.is_active(BuiltinKind::Session));
    }
}
