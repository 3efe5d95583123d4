use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, RateLimitConfig, ServerConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TM_CONFIG_DIR env var, else use ./.teammate/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

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

    /// Get the config directory.
    /// Priority: TM_CONFIG_DIR env var > ./.teammate/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
            && !dir.trim().is_empty()
        {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|_| ConfigError::NoConfigDir)?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.rate_limit.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Database URL with relative paths resolved against the config directory
    pub fn database_url(&self) -> ConfigErrorResult<String> {
        let config_dir = Self::config_dir()?;
        Ok(self.database.resolved_url(&config_dir))
    }

    /// Absolute log directory
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.logging.dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }
        Ok(Self::config_dir()?.join(dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.url, self.database.max_connections
        );
        info!(
            "  auth: {} secret, {} expiry={}m leeway={}s",
            if self.auth.secret_key.is_some() {
                "configured"
            } else {
                "missing"
            },
            self.auth.algorithm,
            self.auth.access_token_expire_minutes,
            self.auth.leeway_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  rate_limit: login {}/{}s",
            self.rate_limit.login_max_requests, self.rate_limit.login_window_secs
        );
        info!(
            "  validation: password>={}, name<={}, text<={}, languages<={}x{}",
            self.validation.min_password_length,
            self.validation.max_name_length,
            self.validation.max_text_length,
            self.validation.max_languages,
            self.validation.max_language_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TM_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("TM_DATABASE_URL", &mut self.database.url);
        Self::apply_env_parse(
            "TM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("TM_AUTH_SECRET_KEY", &mut self.auth.secret_key);
        Self::apply_env_string("TM_AUTH_ALGORITHM", &mut self.auth.algorithm);
        Self::apply_env_parse(
            "TM_AUTH_ACCESS_TOKEN_EXPIRE_MINUTES",
            &mut self.auth.access_token_expire_minutes,
        );
        Self::apply_env_parse("TM_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);

        // Logging
        Self::apply_env_parse("TM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TM_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "TM_RATE_LIMIT_LOGIN_MAX_REQUESTS",
            &mut self.rate_limit.login_max_requests,
        );
        Self::apply_env_parse(
            "TM_RATE_LIMIT_LOGIN_WINDOW_SECS",
            &mut self.rate_limit.login_window_secs,
        );

        // Validation
        Self::apply_env_parse(
            "TM_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
        Self::apply_env_parse(
            "TM_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );
        Self::apply_env_parse(
            "TM_VALIDATION_MAX_TEXT_LENGTH",
            &mut self.validation.max_text_length,
        );
        Self::apply_env_parse(
            "TM_VALIDATION_MAX_LANGUAGES",
            &mut self.validation.max_languages,
        );
        Self::apply_env_parse(
            "TM_VALIDATION_MAX_LANGUAGE_LENGTH",
            &mut self.validation.max_language_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values keep the current setting.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        let Ok(val) = std::env::var(var_name) else {
            return;
        };
        match val.parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => log::warn!("Ignoring {}={:?}: not a valid value", var_name, val),
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
