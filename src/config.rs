use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8084,
            },
            database: DatabaseConfig {
                path: get_default_db_path(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[server]
host = "127.0.0.1"
port = 8084

[database]
path = "~/.local/share/star-forum/forum.db"
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path))
            .build()?;

        let mut config: AppConfig = builder.try_deserialize()?;
        expand_db_path(&mut config);

        Ok(config)
    }

    pub fn load_from_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::Message(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.to_path_buf()))
            .build()?;

        let mut config: AppConfig = builder.try_deserialize()?;
        expand_db_path(&mut config);

        Ok(config)
    }
}

// Expand tilde in the database path
fn expand_db_path(config: &mut AppConfig) {
    if config.database.path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = config.database.path.to_string_lossy();
            let expanded = path_str.replacen("~", &home.to_string_lossy(), 1);
            config.database.path = PathBuf::from(expanded);
        }
    }
}

fn get_config_path() -> PathBuf {
    if let Some(home) = home::home_dir() {
        home.join(".config/star-forum/config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(home) = home::home_dir() {
        home.join(".local/share/star-forum/forum.db")
    } else {
        PathBuf::from("forum.db")
    }
}
