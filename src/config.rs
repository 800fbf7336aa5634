//! Runtime configuration.
//!
//! Layered as defaults, then environment, then command-line flags.
//!
//! | Setting | Flag | Environment | Default |
//! |---------|------|-------------|---------|
//! | API base URL | `--api-base` | `STARSHIPS_API_BASE` | `https://swapi.dev/api` |
//! | Log level | `--log-level` | `STARSHIPS_LOG` | `info` |
//! | Log file | `--log-file` | `STARSHIPS_LOG_FILE` | `<cache dir>/starships/starships.log` |
//! | Request timeout | `--timeout` | `STARSHIPS_TIMEOUT` | none |
//! | Initial path | positional | - | `/` |

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::api::DEFAULT_API_BASE;
use crate::cli::RunArgs;
use crate::router::normalize_path;
use crate::traits::DiagnosticLevel;

pub const ENV_API_BASE: &str = "STARSHIPS_API_BASE";
pub const ENV_LOG_LEVEL: &str = "STARSHIPS_LOG";
pub const ENV_LOG_FILE: &str = "STARSHIPS_LOG_FILE";
pub const ENV_TIMEOUT: &str = "STARSHIPS_TIMEOUT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown log level '{value}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a whole number of seconds")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var}: API base URL must not be empty")]
    EmptyApiBase { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API base URL without a trailing slash
    pub api_base: String,
    pub log_level: DiagnosticLevel,
    /// `None` disables file logging
    pub log_file: Option<PathBuf>,
    /// `None` means requests may hang indefinitely
    pub timeout: Option<Duration>,
    /// Normalized path shown at startup
    pub initial_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: DiagnosticLevel::Info,
            log_file: default_log_file(),
            timeout: None,
            initial_path: "/".to_string(),
        }
    }
}

/// `<cache dir>/starships/starships.log`, if the platform has a cache dir.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("starships").join("starships.log"))
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_log_level(mut self, level: DiagnosticLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_initial_path(mut self, path: &str) -> Self {
        self.initial_path = normalize_path(path);
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overlaid with values from `lookup`. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(base) = get(ENV_API_BASE) {
            config = config.with_api_base(base.trim());
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            let parsed = DiagnosticLevel::parse(&level).ok_or(ConfigError::InvalidLogLevel {
                var: ENV_LOG_LEVEL,
                value: level.clone(),
            })?;
            config = config.with_log_level(parsed);
        }
        if let Some(file) = get(ENV_LOG_FILE) {
            config = config.with_log_file(Some(PathBuf::from(file)));
        }
        if let Some(secs) = get(ENV_TIMEOUT) {
            let parsed: u64 = secs.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                var: ENV_TIMEOUT,
                value: secs.clone(),
            })?;
            config = config.with_timeout(Some(Duration::from_secs(parsed)));
        }

        config.validate(ENV_API_BASE)?;
        Ok(config)
    }

    /// Overlay command-line flags.
    pub fn apply_args(mut self, args: &RunArgs) -> Result<Self, ConfigError> {
        if let Some(base) = &args.api_base {
            self = self.with_api_base(base.as_str());
        }
        if let Some(level) = args.log_level {
            self = self.with_log_level(level);
        }
        if let Some(file) = &args.log_file {
            self = self.with_log_file(Some(file.clone()));
        }
        if let Some(secs) = args.timeout_secs {
            self = self.with_timeout(Some(Duration::from_secs(secs)));
        }
        if let Some(path) = &args.path {
            self = self.with_initial_path(path);
        }
        self.validate("--api-base")?;
        Ok(self)
    }

    fn validate(&self, var: &'static str) -> Result<(), ConfigError> {
        if self.api_base.is_empty() {
            return Err(ConfigError::EmptyApiBase { var });
        }
        Ok(())
    }
}
