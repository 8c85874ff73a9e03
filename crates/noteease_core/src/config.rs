//! Process configuration for the note core.
//!
//! # Responsibility
//! - Resolve logging settings from the environment with build-mode defaults.
//! - Normalize log level spellings in one place.
//!
//! # Invariants
//! - `CoreConfig::log_level` is always one of `trace|debug|info|warn|error`.
//! - `CoreConfig::log_dir`, when set, is absolute.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "NOTEEASE_LOG_LEVEL";
/// Environment variable enabling file logging into a directory.
pub const LOG_DIR_ENV: &str = "NOTEEASE_LOG_DIR";

/// Configuration parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    EmptyLogDir,
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyLogDir => write!(f, "log_dir cannot be empty"),
            Self::RelativeLogDir(path) => write!(
                f,
                "log_dir must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `NOTEEASE_LOG_LEVEL` and `NOTEEASE_LOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps variable names to values.
    ///
    /// Unset or blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|value| !value.trim().is_empty()) {
            config.log_level = normalize_level(&level)?;
        }
        if let Some(dir) = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty()) {
            config.log_dir = Some(normalize_log_dir(&dir)?);
        }
        Ok(config)
    }

    /// Overrides the log level.
    pub fn with_log_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level = normalize_level(level)?;
        Ok(self)
    }

    /// Overrides the log directory.
    pub fn with_log_dir(mut self, log_dir: &str) -> Result<Self, ConfigError> {
        self.log_dir = Some(normalize_log_dir(log_dir)?);
        Ok(self)
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Maps a user-supplied level to its canonical spelling.
pub fn normalize_level(level: &str) -> Result<&'static str, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(ConfigError::InvalidLogLevel(other.to_string())),
    }
}

pub(crate) fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyLogDir);
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(ConfigError::RelativeLogDir(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::{
        default_log_level, normalize_level, ConfigError, CoreConfig, LOG_DIR_ENV, LOG_LEVEL_ENV,
    };
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").expect("upper-case level should normalize"), "info");
        assert_eq!(normalize_level(" warning ").expect("warning alias should normalize"), "warn");
        assert!(matches!(
            normalize_level("loud"),
            Err(ConfigError::InvalidLogLevel(value)) if value == "loud"
        ));
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[])).expect("empty environment should resolve");
        assert_eq!(config.log_level, default_log_level());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn environment_values_are_normalized() {
        let dir = std::env::temp_dir();
        let dir_text = dir.to_str().expect("temp dir path should be utf-8").to_string();
        let config = CoreConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_ENV, "Error"),
            (LOG_DIR_ENV, dir_text.as_str()),
        ]))
        .expect("valid environment should resolve");
        assert_eq!(config.log_level, "error");
        assert_eq!(config.log_dir, Some(dir));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let err = CoreConfig::default().with_log_dir("logs/dev").expect_err("relative dir should be rejected");
        assert!(err.to_string().contains("absolute"));
    }
}
