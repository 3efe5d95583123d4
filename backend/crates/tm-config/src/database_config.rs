use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_URL, DEFAULT_DB_MAX_CONNECTIONS,
    MAX_DB_MAX_CONNECTIONS, MIN_DB_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection URL. Relative file paths live inside the config dir.
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_DATABASE_URL),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.url.starts_with("sqlite:") {
            return Err(ConfigError::database(format!(
                "database.url must be a sqlite: URL, got '{}'",
                self.url
            )));
        }

        if self.max_connections < MIN_DB_MAX_CONNECTIONS
            || self.max_connections > MAX_DB_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DB_MAX_CONNECTIONS, MAX_DB_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }

    /// URL with a relative file path rewritten to sit under `config_dir`.
    /// In-memory and absolute URLs are returned unchanged.
    pub fn resolved_url(&self, config_dir: &Path) -> String {
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))
            .unwrap_or(&self.url);

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        if path.is_empty() || path.contains(":memory:") || Path::new(path).is_absolute() {
            return self.url.clone();
        }

        let joined = config_dir.join(path);
        match query {
            Some(q) => format!("sqlite://{}?{}", joined.display(), q),
            None => format!("sqlite://{}", joined.display()),
        }
    }
}
