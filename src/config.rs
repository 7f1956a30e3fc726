//! Configuration System
//!
//! Endpoint paths, auth pages and the fixed form messages. The structs are
//! available on every target; loading from TOML files and environment
//! variables is native-only.

use serde::Deserialize;
#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub endpoints: EndpointConfig,

    #[serde(default)]
    pub pages: PageConfig,

    #[serde(default)]
    pub messages: MessageConfig,

    #[serde(default)]
    pub account: Option<AccountConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the backend lives
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Prefix for every endpoint path. Empty means same-origin.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5009".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ClientConfig {
    /// Join the base URL and an endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Backend routes
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_submit_entry")]
    pub submit_entry: String,

    #[serde(default = "default_signup")]
    pub signup: String,

    #[serde(default = "default_login")]
    pub login: String,

    #[serde(default = "default_logout")]
    pub logout: String,

    #[serde(default = "default_set_timezone")]
    pub set_timezone: String,

    /// Where a successful login lands
    #[serde(default = "default_root")]
    pub root: String,
}

fn default_submit_entry() -> String {
    "/submit_entry".to_string()
}

fn default_signup() -> String {
    "/signup".to_string()
}

fn default_login() -> String {
    "/login".to_string()
}

fn default_logout() -> String {
    "/logout".to_string()
}

fn default_set_timezone() -> String {
    "/set_timezone".to_string()
}

fn default_root() -> String {
    "/".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            submit_entry: default_submit_entry(),
            signup: default_signup(),
            login: default_login(),
            logout: default_logout(),
            set_timezone: default_set_timezone(),
            root: default_root(),
        }
    }
}

/// Page routes the bootstrap treats specially
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Login and signup pages; no app bootstrap runs there
    #[serde(default = "default_auth_pages")]
    pub auth: Vec<String>,
}

fn default_auth_pages() -> Vec<String> {
    vec!["/login_page".to_string(), "/signup_page".to_string()]
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            auth: default_auth_pages(),
        }
    }
}

impl PageConfig {
    pub fn is_auth_page(&self, path: &str) -> bool {
        self.auth.iter().any(|p| p == path)
    }
}

/// Fixed user-facing strings
#[derive(Debug, Clone, Deserialize)]
pub struct MessageConfig {
    /// Exact reply that means the entry was stored
    #[serde(default = "default_entry_saved")]
    pub entry_saved: String,

    #[serde(default = "default_entry_failed")]
    pub entry_failed: String,

    #[serde(default = "default_signup_failed")]
    pub signup_failed: String,

    #[serde(default = "default_login_failed")]
    pub login_failed: String,
}

fn default_entry_saved() -> String {
    "Data inserted successfully!".to_string()
}

fn default_entry_failed() -> String {
    "An error occurred".to_string()
}

fn default_signup_failed() -> String {
    "An error occurred.".to_string()
}

fn default_login_failed() -> String {
    "An error occurred during login.".to_string()
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            entry_saved: default_entry_saved(),
            entry_failed: default_entry_failed(),
            signup_failed: default_signup_failed(),
            login_failed: default_login_failed(),
        }
    }
}

/// Stored credentials for the CLI
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
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

#[cfg(feature = "native")]
impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("moodtrack").join("config.toml")),
            Some(PathBuf::from("/etc/moodtrack/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("MOODTRACK_BASE_URL") {
            self.client.base_url = url;
        }
        if let Ok(secs) = std::env::var("MOODTRACK_TIMEOUT_SECS") {
            if let Ok(s) = secs.parse() {
                self.client.request_timeout_secs = s;
            }
        }

        // Both halves are needed; a lone email or password is ignored
        if let (Ok(email), Ok(password)) = (
            std::env::var("MOODTRACK_EMAIL"),
            std::env::var("MOODTRACK_PASSWORD"),
        ) {
            self.account = Some(AccountConfig { email, password });
        }

        if let Ok(level) = std::env::var("MOODTRACK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MOODTRACK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[cfg(feature = "native")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# MoodTrack Client Configuration
#
# Environment variables override these settings:
# - MOODTRACK_BASE_URL
# - MOODTRACK_TIMEOUT_SECS
# - MOODTRACK_EMAIL / MOODTRACK_PASSWORD
# - MOODTRACK_LOG_LEVEL
# - MOODTRACK_LOG_FORMAT

[client]
# Backend origin
base_url = "http://localhost:5009"

# Request timeout in seconds
request_timeout_secs = 30

[endpoints]
submit_entry = "/submit_entry"
signup = "/signup"
login = "/login"
logout = "/logout"
set_timezone = "/set_timezone"
root = "/"

[pages]
# Pages where the app shell is not bootstrapped
auth = ["/login_page", "/signup_page"]

[messages]
# Exact reply that clears the mood form
entry_saved = "Data inserted successfully!"
entry_failed = "An error occurred"
signup_failed = "An error occurred."
login_failed = "An error occurred during login."

# [account]
# email = "you@example.com"
# password = ""

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}
