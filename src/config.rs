//! Runtime configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `CARDIOPREDICT_LOG_MODE` | `auto` | `auto`, `file` or `stdout` |
//! | `CARDIOPREDICT_LOG_FILE` | `cardiopredict.log` | log path when logging to a file |
//! | `CARDIOPREDICT_START_WITH_SAMPLE` | off | pre-load the sample patient into the form |

use std::path::PathBuf;

use crate::CardioError;

pub const LOG_MODE_VAR: &str = "CARDIOPREDICT_LOG_MODE";
pub const LOG_FILE_VAR: &str = "CARDIOPREDICT_LOG_FILE";
pub const START_WITH_SAMPLE_VAR: &str = "CARDIOPREDICT_START_WITH_SAMPLE";

const DEFAULT_LOG_FILE: &str = "cardiopredict.log";

/// Where log output goes.
///
/// Writing logs to the terminal corrupts the TUI alternate screen, so the
/// default only logs to stdout when stdout is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    /// Parse a mode name. Unknown names fall back to `Auto`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Self::File,
            "stdout" => Self::Stdout,
            _ => Self::Auto,
        }
    }

    /// Resolve `Auto` against whether stdout is interactive.
    #[must_use]
    pub fn use_file(self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

/// Interpret a boolean flag value (`1`, `true`, `yes`, any case).
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// Settings for the interactive application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    pub start_with_sample: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            start_with_sample: false,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns `CardioError::Config` if the log file variable is set but empty.
    pub fn from_env() -> Result<Self, CardioError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns `CardioError::Config` if the log file variable is set but empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CardioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(mode) = lookup(LOG_MODE_VAR) {
            config.log_mode = LogMode::parse(&mode);
        }

        if let Some(file) = lookup(LOG_FILE_VAR) {
            if file.trim().is_empty() {
                return Err(CardioError::Config(format!("{LOG_FILE_VAR} is empty")));
            }
            config.log_file = PathBuf::from(file);
        }

        if let Some(flag) = lookup(START_WITH_SAMPLE_VAR) {
            config.start_with_sample = parse_flag(&flag);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("Should build");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (LOG_MODE_VAR, "STDOUT"),
            (LOG_FILE_VAR, "/tmp/cardio.log"),
            (START_WITH_SAMPLE_VAR, "Yes"),
        ]))
        .expect("Should build");

        assert_eq!(config.log_mode, LogMode::Stdout);
        assert_eq!(config.log_file, PathBuf::from("/tmp/cardio.log"));
        assert!(config.start_with_sample);
    }

    #[test]
    fn test_empty_log_file_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(LOG_FILE_VAR, "  ")]));
        assert!(matches!(result, Err(CardioError::Config(_))));
    }

    #[test]
    fn test_log_mode_resolution() {
        assert_eq!(LogMode::parse("bogus"), LogMode::Auto);
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("no"));
    }
}
