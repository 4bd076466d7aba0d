//! Runtime configuration from environment variables.
//!
//! Read once in `main` and passed down explicitly.

use std::path::PathBuf;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    Auto,
    File,
    Stdout,
}

impl LogMode {
    fn parse(value: &str) -> Self {
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

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the three model artifacts (`MEDPREDICT_MODEL_DIR`)
    pub model_dir: PathBuf,
    /// `MEDPREDICT_LOG_MODE`: auto | file | stdout
    pub log_mode: LogMode,
    /// `MEDPREDICT_LOG_FILE`
    pub log_file: PathBuf,
    /// `MEDPREDICT_REQUIRE_MANIFEST`: refuse unverified models
    pub require_manifest: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("Models"),
            log_mode: LogMode::Auto,
            log_file: PathBuf::from("medpredict.log"),
            require_manifest: false,
        }
    }
}

impl AppConfig {
    /// Build from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            model_dir: lookup("MEDPREDICT_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),
            log_mode: lookup("MEDPREDICT_LOG_MODE")
                .map(|v| LogMode::parse(&v))
                .unwrap_or(defaults.log_mode),
            log_file: lookup("MEDPREDICT_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_file),
            require_manifest: lookup("MEDPREDICT_REQUIRE_MANIFEST")
                .map(|v| parse_flag("MEDPREDICT_REQUIRE_MANIFEST", &v, defaults.require_manifest))
                .unwrap_or(defaults.require_manifest),
        }
    }
}

// Case-insensitive boolean. Unrecognised spellings keep `default` and warn.
fn parse_flag(key: &str, value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        other => {
            tracing::warn!("Ignoring unrecognised {}={:?}; using {}", key, other, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.model_dir, PathBuf::from("Models"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("MEDPREDICT_MODEL_DIR", "/opt/models"),
            ("MEDPREDICT_LOG_MODE", "STDOUT"),
            ("MEDPREDICT_REQUIRE_MANIFEST", "yes"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|k| env.get(k).map(|v| (*v).to_string()));

        assert_eq!(config.model_dir, PathBuf::from("/opt/models"));
        assert_eq!(config.log_mode, LogMode::Stdout);
        assert!(config.require_manifest);
        assert_eq!(config.log_file, PathBuf::from("medpredict.log"));
    }

    #[test]
    fn test_require_manifest_any_case() {
        for value in ["True", "on", "ON", "Yes", " 1 "] {
            let config = AppConfig::from_lookup(|k| {
                (k == "MEDPREDICT_REQUIRE_MANIFEST").then(|| value.to_string())
            });
            assert!(config.require_manifest, "{value:?} should enable the manifest check");
        }
        for value in ["False", "OFF", "0", "no"] {
            let config = AppConfig::from_lookup(|k| {
                (k == "MEDPREDICT_REQUIRE_MANIFEST").then(|| value.to_string())
            });
            assert!(!config.require_manifest, "{value:?} should leave it off");
        }
    }

    #[test]
    fn test_unrecognised_flag_keeps_default() {
        assert!(!parse_flag("MEDPREDICT_REQUIRE_MANIFEST", "maybe", false));
        assert!(parse_flag("MEDPREDICT_REQUIRE_MANIFEST", "maybe", true));
    }

    #[test]
    fn test_log_mode_resolution() {
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
        assert_eq!(LogMode::parse("bogus"), LogMode::Auto);
    }
}
