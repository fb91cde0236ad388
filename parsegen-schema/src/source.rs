//! Schema sources.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result, SchemaEntry, parse_schema_str};

/// Somewhere schema entries can be loaded from.
pub trait SchemaSource {
    /// Short human-readable description (a path or URL).
    fn describe(&self) -> String;

    /// Load every schema entry, in source order.
    fn load(&self) -> Result<Vec<SchemaEntry>>;
}

/// A JSON schema document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<SchemaEntry>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            Box::new(Error::Io {
                path: self.path.clone(),
                source: e,
            })
        })?;
        let entries = parse_schema_str(&content, &self.describe())?;
        debug!(path = %self.path.display(), classes = entries.len(), "loaded schema file");
        Ok(entries)
    }
}

/// The `/schemas` endpoint of a running Parse Server.
///
/// Requires the master key; every parameter is checked before any request
/// is made.
#[derive(Debug, Clone, Default)]
pub struct ServerSource {
    pub server_url: Option<String>,
    pub app_id: Option<String>,
    pub master_key: Option<String>,
}

impl ServerSource {
    pub fn new(
        server_url: Option<String>,
        app_id: Option<String>,
        master_key: Option<String>,
    ) -> Self {
        Self {
            server_url,
            app_id,
            master_key,
        }
    }

    /// The full `/schemas` URL, without validating parameters.
    pub fn schemas_url(&self) -> Option<String> {
        self.server_url
            .as_deref()
            .map(|url| format!("{}/schemas", url.trim_end_matches('/')))
    }

    fn require<'a>(
        value: &'a Option<String>,
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    ) -> Result<&'a str> {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Box::new(Error::MissingParameter { name, flag, env }))
    }
}

impl SchemaSource for ServerSource {
    fn describe(&self) -> String {
        self.schemas_url().unwrap_or_else(|| "<no server url>".to_string())
    }

    fn load(&self) -> Result<Vec<SchemaEntry>> {
        Self::require(&self.server_url, "server_url", "server-url", "PARSE_SERVER_URL")?;
        let app_id = Self::require(&self.app_id, "app_id", "app-id", "PARSE_APP_ID")?;
        let master_key =
            Self::require(&self.master_key, "master_key", "master-key", "PARSE_MASTER_KEY")?;
        let url = self.describe();

        debug!(url = %url, "fetching schema");
        let http_error = |source| {
            Box::new(Error::Http {
                url: url.clone(),
                source,
            })
        };

        let response = reqwest::blocking::Client::new()
            .get(&url)
            .header("X-Parse-Application-Id", app_id)
            .header("X-Parse-Master-Key", master_key)
            .send()
            .map_err(http_error)?;

        let status = response.status();
        let body = response.text().map_err(http_error)?;
        if !status.is_success() {
            return Err(Box::new(Error::ServerStatus {
                url,
                status: status.as_u16(),
                body,
            }));
        }

        parse_schema_str(&body, &url)
    }
}
