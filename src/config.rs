//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dataset::LoadPolicy;
use crate::login::LoginPacing;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub login: LoginConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Directory with the built web UI and static assets
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Expose the raw dataset at `/student_data.json`
    ///
    /// The bundled web UI signs students in from this file, so turning it
    /// off only suits API-only deployments that use `POST /api/v1/login`.
    #[serde(default = "default_serve_dataset")]
    pub serve_dataset: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "./eagle-ui/dist".to_string()
}

fn default_serve_dataset() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            static_dir: default_static_dir(),
            serve_dataset: default_serve_dataset(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Dataset location and load policy
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// File path or http(s) URL of `student_data.json`
    #[serde(default = "default_dataset_location")]
    pub location: String,

    #[serde(default)]
    pub policy: LoadPolicy,
}

fn default_dataset_location() -> String {
    "./data/student_data.json".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            location: default_dataset_location(),
            policy: LoadPolicy::default(),
        }
    }
}

/// Login pacing
#[derive(Debug, Clone, Deserialize)]
pub struct LoginConfig {
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,

    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_submit_delay() -> u64 {
    800
}

fn default_redirect_delay() -> u64 {
    1000
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

impl LoginConfig {
    pub fn pacing(&self) -> LoginPacing {
        LoginPacing::from_millis(self.submit_delay_ms, self.redirect_delay_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, else default locations, else environment
    pub fn load_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_with_env(path);
        }

        let config_paths = [
            dirs::config_dir().map(|p| p.join("eagle-results").join("config.toml")),
            Some(PathBuf::from("/etc/eagle-results/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Ok(Self::from_env())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("EAGLE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("EAGLE_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = var("EAGLE_STATIC_DIR") {
            self.server.static_dir = dir;
        }
        if let Some(location) = var("EAGLE_DATASET") {
            self.dataset.location = location;
        }
        if let Some(level) = var("EAGLE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("EAGLE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Eagle Results Configuration
#
# Environment variables override these settings:
# - EAGLE_HOST
# - EAGLE_PORT
# - EAGLE_STATIC_DIR
# - EAGLE_DATASET
# - EAGLE_LOG_LEVEL
# - EAGLE_LOG_FORMAT

[server]
host = "0.0.0.0"
port = 8080

# Allowed CORS origins (empty = any)
cors_origins = []

# Built web UI (trunk output) and static assets
static_dir = "./eagle-ui/dist"

# Serve the raw dataset at /student_data.json for the web UI.
# The web UI cannot sign students in without it. Turn off only for
# API-only deployments, which sign in through POST /api/v1/login.
serve_dataset = true

[dataset]
# File path or http(s) URL
location = "./data/student_data.json"

# "fresh" fetches on every page load, "shared" keeps one copy
policy = "fresh"

[login]
# Cosmetic pauses around the login check (0 disables)
submit_delay_ms = 800
redirect_delay_ms = 1000

[logging]
# trace, debug, info, warn, error
level = "info"

# pretty or json
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.server.serve_dataset);
        assert_eq!(config.dataset.policy, LoadPolicy::Fresh);
        assert_eq!(config.login.pacing(), LoginPacing::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_explains_dataset_flag() {
        let text = generate_default_config();
        let comment: String = text
            .lines()
            .take_while(|line| !line.starts_with("serve_dataset"))
            .skip_while(|line| !line.contains("/student_data.json"))
            .collect::<Vec<_>>()
            .join("\n");

        assert!(comment.contains("API-only deployments"));
        assert!(comment.contains("POST /api/v1/login"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [dataset]
            policy = "shared"

            [login]
            submit_delay_ms = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset.policy, LoadPolicy::Shared);
        assert_eq!(config.dataset.location, "./data/student_data.json");
        assert_eq!(config.login.submit_delay_ms, 0);
        assert_eq!(config.login.redirect_delay_ms, 1000);
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_policy_rejected() {
        assert!(Config::parse("[dataset]\npolicy = \"sometimes\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("EAGLE_PORT", "9000"),
            ("EAGLE_DATASET", "https://example.com/student_data.json"),
            ("EAGLE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.dataset.location, "https://example.com/student_data.json");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_bad_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "EAGLE_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 3000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 3000);

        let missing = Config::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
