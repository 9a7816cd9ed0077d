use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server address (e.g., "0.0.0.0:8080")
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Configuration directory
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,
    /// Employee seed file (JSON), loaded into an empty directory at startup
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
    /// Database configuration (loaded from separate file)
    #[serde(skip)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database type (postgres or memory)
    #[serde(default = "default_db_type", rename = "type")]
    pub db_type: String,
    /// Database host
    #[serde(default = "default_db_host")]
    pub host: String,
    /// Database port
    #[serde(default = "default_db_port")]
    pub port: u16,
    /// Database name
    #[serde(default = "default_db_name", rename = "database")]
    pub name: String,
    /// Database user
    #[serde(default = "default_db_user", rename = "username")]
    pub user: String,
    /// Database password
    #[serde(default)]
    pub password: String,
}

// Default value functions
fn default_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("./etc")
}

fn default_db_type() -> String {
    "postgres".to_string()
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_name() -> String {
    "directory".to_string()
}

fn default_db_user() -> String {
    "postgres".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            config_dir: default_config_dir(),
            seed_file: None,
            log: LogConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: default_db_type(),
            host: default_db_host(),
            port: default_db_port(),
            name: default_db_name(),
            user: default_db_user(),
            password: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Generate database connection URL
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Database config lives in a separate db.toml next to the main file
        let db_toml_path = config.config_dir.join("db.toml");
        if db_toml_path.exists() {
            let db_content = std::fs::read_to_string(&db_toml_path)?;
            config.database = toml::from_str(&db_content)?;
        }

        Ok(config)
    }
}
