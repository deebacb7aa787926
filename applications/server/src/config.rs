/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Deadline for the store work of a single request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Store connection string: a `SQLite` directory URL or `sqlite::memory:`
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Database name, used as the file name inside `database_url`
    #[serde(default = "default_database_name")]
    pub database_name: String,
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl StorageSettings {
    /// Connection string handed to the pool
    ///
    /// `sqlite://./data` + `karaoke` becomes `sqlite://./data/karaoke.db`.
    /// In-memory URLs are used as they are.
    pub fn connection_url(&self) -> String {
        if self.database_url.contains(":memory:") {
            return self.database_url.clone();
        }

        let base = self.database_url.trim_end_matches('/');
        format!("{}/{}.db", base, self.database_name)
    }

    /// Directory that has to exist before the database file can be created
    pub fn data_dir(&self) -> Option<PathBuf> {
        if self.database_url.contains(":memory:") {
            return None;
        }

        let path = self
            .database_url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:")
            .trim_end_matches('/');
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Environment variables use the `KARAOKE_` prefix and `__` between
    /// sections, e.g. `KARAOKE_SERVER__PORT=9000`.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // An explicit path must exist; the default one is optional
        match config_path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("KARAOKE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set KARAOKE_SERVER__PORT)".to_string(),
            ));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(ServerError::Config(
                "Request timeout must be at least one second".to_string(),
            ));
        }

        if self.storage.database_url.is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set KARAOKE_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.storage.database_name.is_empty() {
            return Err(ServerError::Config(
                "Database name is required (set KARAOKE_STORAGE__DATABASE_NAME)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        request_timeout_secs: default_request_timeout_secs(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        database_name: default_database_name(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data".to_string()
}

fn default_database_name() -> String {
    "karaoke".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn connection_url_joins_directory_and_name() {
        let storage = StorageSettings {
            database_url: "sqlite://./data/".to_string(),
            database_name: "karaoke".to_string(),
        };
        assert_eq!(storage.connection_url(), "sqlite://./data/karaoke.db");
        assert_eq!(storage.data_dir(), Some(PathBuf::from("./data")));
    }

    #[test]
    fn in_memory_url_is_kept() {
        let storage = StorageSettings {
            database_url: "sqlite::memory:".to_string(),
            database_name: "ignored".to_string(),
        };
        assert_eq!(storage.connection_url(), "sqlite::memory:");
        assert!(storage.data_dir().is_none());
    }

    #[test]
    fn validate_rejects_empty_database_name() {
        let mut config = ServerConfig::default();
        config.storage.database_name = String::new();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = ServerConfig::default();
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reads_an_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("karaoke.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9123\n\n[storage]\ndatabase_name = \"friday\"\n",
        )
        .unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9123);
        assert_eq!(config.storage.database_name, "friday");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let result = ServerConfig::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
