//! Configuration manager implementation

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use config::{Config, Environment, File, FileFormat, Map};

use crate::{
    error::{ConfigError, Result},
    types::{ConfigManager as ConfigManagerTrait, DashboardConfig},
};

/// Default environment variable prefix
pub const ENV_PREFIX: &str = "PANEBOARD";

/// Configuration manager
///
/// Holds the merged settings of the last [`ConfigManager::load`]; lookups
/// never touch the filesystem.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
    /// Fail loading when the file is missing
    require_file: bool,
    /// Variables read in place of the process environment
    env_vars: Option<Map<String, String>>,
    /// Merged settings
    settings: Config,
}

impl ConfigManager {
    /// Create a new configuration manager with empty settings
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: ENV_PREFIX.to_string(),
            require_file: false,
            env_vars: None,
            settings: Config::default(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            ..Self::new()
        }
    }

    /// Read environment overrides from `<prefix>_*` instead
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read environment overrides from `vars` rather than the process
    /// environment
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Make a missing config file a load error
    pub fn with_required_file(mut self, required: bool) -> Self {
        self.require_file = required;
        self
    }

    /// Build a manager directly from config text, skipping file and environment
    pub fn from_content(content: &str, format: FileFormat) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(content, format))
            .build()?;

        Ok(Self {
            settings,
            ..Self::new()
        })
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("paneboard")
            .join("config.toml")
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Merge the config file and environment into the current settings
    pub fn load(&mut self) -> Result<()> {
        if self.require_file && !self.config_path.exists() {
            return Err(ConfigError::NotFound(
                self.config_path.display().to_string(),
            ));
        }

        let settings = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .source(self.env_vars.clone()),
            )
            .build()?;

        tracing::debug!(path = %self.config_path.display(), "Loaded configuration");
        self.settings = settings;
        Ok(())
    }

    /// String at dotted `key`, or `default` when missing or not a string
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match self.settings.get_string(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::trace!(key, "Using default: {}", e);
                default.to_string()
            }
        }
    }

    /// Bool at dotted `key`, or `default` when missing or not a bool
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.settings.get_bool(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::trace!(key, "Using default: {}", e);
                default
            }
        }
    }

    /// Typed view of the current settings
    pub fn dashboard(&self) -> Result<DashboardConfig> {
        let config = self.settings.clone().try_deserialize::<DashboardConfig>()?;
        Ok(config)
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<DashboardConfig> {
        self.load()?;
        let config = self.dashboard()?;
        self.validate_config(&config)?;
        Ok(config)
    }

    fn validate_config(&self, config: &DashboardConfig) -> Result<()> {
        let mut seen = HashSet::new();
        for widget in &config.widgets {
            if widget.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Widget name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(widget.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate widget name: {}",
                    widget.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
