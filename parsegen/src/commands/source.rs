use std::path::{Path, PathBuf};

use clap::Args;
use parsegen_schema::{
    BuiltinKind, CONFIG_FILE_NAME, Config, ConfigFile, FileSource, NameOverrideMap, OverrideValue,
    SchemaSource, ServerSource, parse_override_arg,
};

/// Where the schema and overrides come from, shared by `generate` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to parsegen.toml (defaults to ./parsegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Local JSON schema file
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Parse Server base URL
    #[arg(long, env = "PARSE_SERVER_URL")]
    pub server_url: Option<String>,

    /// Parse application id
    #[arg(long, env = "PARSE_APP_ID", hide_env_values = true)]
    pub app_id: Option<String>,

    /// Parse master key
    #[arg(long, env = "PARSE_MASTER_KEY", hide_env_values = true)]
    pub master_key: Option<String>,

    /// Built-in override such as `_User=AppUser` or `_Role=true` (repeatable)
    #[arg(long = "class", value_name = "KIND=VALUE", value_parser = parse_override_arg)]
    pub class_overrides: Vec<(BuiltinKind, OverrideValue)>,
}

impl SourceArgs {
    /// Load the explicit config file, or `./parsegen.toml` if it exists.
    pub fn load_config(&self) -> parsegen_schema::Result<Config> {
        match &self.config {
            Some(path) => Ok(ConfigFile::open(path)?.into_config()),
            None if Path::new(CONFIG_FILE_NAME).is_file() => {
                Ok(ConfigFile::open(CONFIG_FILE_NAME)?.into_config())
            }
            None => Ok(Config::default()),
        }
    }

    /// Config overrides with `--class` entries laid over them.
    pub fn overrides(&self, config: &Config) -> NameOverrideMap {
        let mut overrides = config.classes.clone();
        for (kind, value) in &self.class_overrides {
            overrides.insert(*kind, value.clone());
        }
        overrides
    }

    /// Pick the schema source.
    ///
    /// Flags win over the config file. With no local schema anywhere the
    /// server source is used, which reports any missing parameter on load.
    pub fn source(&self, config: &Config) -> Box<dyn SchemaSource> {
        if let Some(path) = &self.schema {
            return Box::new(FileSource::new(path));
        }
        if self.server_url.is_none()
            && let Some(path) = &config.source.schema
        {
            return Box::new(FileSource::new(self.config_dir().join(path)));
        }

        Box::new(ServerSource::new(
            self.server_url.clone().or_else(|| config.source.server_url.clone()),
            self.app_id.clone().or_else(|| config.source.app_id.clone()),
            self.master_key.clone().or_else(|| config.source.master_key.clone()),
        ))
    }

    /// Directory that relative paths in the config file are resolved against.
    fn config_dir(&self) -> PathBuf {
        self.config
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }
}
