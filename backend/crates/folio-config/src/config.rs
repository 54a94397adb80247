use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. `.env` in the working directory, if present
    /// 2. FOLIO_CONFIG_DIR env var, else ./.folio/
    /// 3. Auto-create the config directory
    /// 4. config.toml if it exists, else defaults
    /// 5. FOLIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // Missing .env is the normal case outside development.
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: FOLIO_CONFIG_DIR env var > ./.folio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate every section. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(file))),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  validation: url={}, alt={}, caption={}, slug={}, title={}, content={}",
            self.validation.max_url_length,
            self.validation.max_alt_length,
            self.validation.max_caption_length,
            self.validation.max_slug_length,
            self.validation.max_title_length,
            self.validation.max_content_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FOLIO_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FOLIO_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("FOLIO_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FOLIO_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("FOLIO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FOLIO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FOLIO_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_URL_LENGTH",
            &mut self.validation.max_url_length,
        );
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_ALT_LENGTH",
            &mut self.validation.max_alt_length,
        );
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_CAPTION_LENGTH",
            &mut self.validation.max_caption_length,
        );
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_SLUG_LENGTH",
            &mut self.validation.max_slug_length,
        );
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_TITLE_LENGTH",
            &mut self.validation.max_title_length,
        );
        Self::apply_env_parse(
            "FOLIO_VALIDATION_MAX_CONTENT_LENGTH",
            &mut self.validation.max_content_length,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored and the previous value kept.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
