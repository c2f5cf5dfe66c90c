//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub stub: StubConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Blog backend client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint and relative image path resolves against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api/".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Stub backend server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StubConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl StubConfig {
    /// Socket address to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

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

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Nothing is logged here; call [`Loaded::report`] once the subscriber
    /// is installed.
    pub fn load_default() -> Loaded {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("blogdeck").join("config.toml")),
            Some(PathBuf::from("./blogdeck.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths, |key| std::env::var(key).ok())
    }

    fn load_first(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> Loaded {
        let mut skipped = Vec::new();
        for path in paths.iter().filter(|path| path.exists()) {
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides(&lookup);
                    return Loaded {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    };
                }
                Err(e) => skipped.push(e),
            }
        }

        let mut config = Config::default();
        config.apply_overrides(&lookup);
        Loaded {
            config,
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("BLOGDECK_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("BLOGDECK_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        // Stub overrides
        if let Some(host) = lookup("BLOGDECK_STUB_HOST") {
            self.stub.host = host;
        }
        if let Some(port) = lookup("BLOGDECK_STUB_PORT") {
            if let Ok(p) = port.parse() {
                self.stub.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("BLOGDECK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BLOGDECK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub skipped: Vec<ConfigError>,
}

impl Loaded {
    /// Log where the config came from and every file that was skipped.
    pub fn report(&self) {
        for error in &self.skipped {
            tracing::warn!("Ignoring config file: {}", error);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
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
    r#"# Blogdeck Configuration
#
# Environment variables override these settings:
# - BLOGDECK_API_URL
# - BLOGDECK_TIMEOUT_SECS
# - BLOGDECK_STUB_HOST
# - BLOGDECK_STUB_PORT
# - BLOGDECK_LOG_LEVEL
# - BLOGDECK_LOG_FORMAT

[api]
# Blog backend base URL; endpoints and relative image paths resolve against it
base_url = "http://127.0.0.1:8000/api/"

# Request timeout in seconds
request_timeout_secs = 30

[stub]
# Address the stub backend listens on
host = "127.0.0.1"
port = 8000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_template_parses() {
        let config = Config::parse(Path::new("template"), &generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api/");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.stub.addr(), "127.0.0.1:8000");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"https://blog.example.com/api\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://blog.example.com/api");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.stub.port, 8000);
    }

    #[test]
    fn test_load_errors() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("BLOGDECK_API_URL", "http://override/api"),
            ("BLOGDECK_TIMEOUT_SECS", "5"),
            ("BLOGDECK_STUB_PORT", "not-a-port"),
            ("BLOGDECK_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://override/api");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.stub.port, 8000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_first_skips_broken_file() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "[api\nbase_url = ").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "[api]\nbase_url = \"https://blog.example.com/api\"").unwrap();

        let paths = vec![
            PathBuf::from("/definitely/not/here.toml"),
            broken.path().to_path_buf(),
            good.path().to_path_buf(),
        ];
        let loaded = Config::load_first(&paths, |_| None);
        assert_eq!(loaded.source.as_deref(), Some(good.path()));
        assert_eq!(loaded.skipped.len(), 1);
        assert!(matches!(loaded.skipped[0], ConfigError::Parse { .. }));
        assert_eq!(loaded.config.api.base_url, "https://blog.example.com/api");
    }

    #[test]
    fn test_load_first_falls_back_to_env() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "not = [toml").unwrap();

        let loaded = Config::load_first(&[broken.path().to_path_buf()], |key| {
            (key == "BLOGDECK_API_URL").then(|| "http://env/api".to_string())
        });
        assert!(loaded.source.is_none());
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.config.api.base_url, "http://env/api");
    }
}
