//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::HttpClientConfig;
use crate::booking::{BlockedDates, ClosedWeekdays, CompositePolicy, DatePolicy, NotBefore};
use crate::dashboard::DEFAULT_REFRESH_INTERVAL_MS;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Salon API endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
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

impl ApiConfig {
    pub fn client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_secs * 1000,
        }
    }
}

/// Booking wizard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Days of the week the date picker disables ("sat", "sunday", ...)
    #[serde(default = "default_closed_weekdays")]
    pub closed_weekdays: Vec<String>,

    /// Specific closed dates (holidays, fully booked days)
    #[serde(default)]
    pub blocked_dates: Vec<NaiveDate>,

    /// Disable dates before today
    #[serde(default = "default_disable_past")]
    pub disable_past_dates: bool,
}

fn default_closed_weekdays() -> Vec<String> {
    vec!["sat".to_string(), "sun".to_string()]
}

fn default_disable_past() -> bool {
    true
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            closed_weekdays: default_closed_weekdays(),
            blocked_dates: Vec::new(),
            disable_past_dates: default_disable_past(),
        }
    }
}

impl BookingConfig {
    /// Parse the configured weekday names
    pub fn weekdays(&self) -> Result<Vec<Weekday>, ConfigError> {
        self.closed_weekdays
            .iter()
            .map(|name| {
                name.parse::<Weekday>()
                    .map_err(|_| ConfigError::InvalidWeekday(name.clone()))
            })
            .collect()
    }

    /// Build the date picker policy from this section
    pub fn date_policy(&self) -> Result<Arc<dyn DatePolicy>, ConfigError> {
        let mut policy = CompositePolicy::new().with(ClosedWeekdays::new(self.weekdays()?));

        if !self.blocked_dates.is_empty() {
            policy = policy.with(BlockedDates::new(self.blocked_dates.iter().copied()));
        }
        if self.disable_past_dates {
            policy = policy.with(NotBefore::today());
        }

        Ok(Arc::new(policy))
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

fn default_refresh_interval() -> u64 {
    DEFAULT_REFRESH_INTERVAL_MS / 1000
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
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
            file: None,
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.booking.weekdays()?;

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
            dirs::config_dir().map(|p| p.join("salon").join("config.toml")),
            Some(PathBuf::from("/etc/salon/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the process environment in practice)
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("SALON_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("SALON_API_TIMEOUT") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = secs;
            }
        }

        if let Some(interval) = lookup("SALON_REFRESH_INTERVAL") {
            if let Ok(secs) = interval.parse() {
                self.dashboard.refresh_interval_secs = secs;
            }
        }

        if let Some(level) = lookup("SALON_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SALON_LOG_FORMAT") {
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

    #[error("Unknown weekday in closed_weekdays: {0}")]
    InvalidWeekday(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Salon Booking Configuration
#
# Environment variables override these settings:
# - SALON_API_URL
# - SALON_API_TIMEOUT
# - SALON_REFRESH_INTERVAL
# - SALON_LOG_LEVEL
# - SALON_LOG_FORMAT

[api]
# Base URL of the salon site serving /api/*
base_url = "http://localhost:8080"

# Request timeout in seconds
request_timeout_secs = 30

[booking]
# Days the date picker disables
closed_weekdays = ["sat", "sun"]

# Additional closed dates (YYYY-MM-DD)
blocked_dates = []

# Disable dates before today
disable_past_dates = true

[dashboard]
# Auto-refresh interval in seconds
refresh_interval_secs = 300

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/salon/salon.log"
"#
    .to_string()
}
