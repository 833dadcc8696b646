use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::requirements::Requirements;
use crate::version::{UnsupportedIntersection, VersionRange};

/// Application directory name under the XDG base directories
pub const APP_DIR_NAME: &str = "zeroinstall-model";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persisted command-line preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub logging: LoggingConfig,
    /// Version restrictions applied to every set of requirements
    #[serde(deserialize_with = "deserialize_version_for")]
    pub version_for: IndexMap<String, VersionRange>,
}

/// Read `versionFor`, skipping entries whose range does not parse
fn deserialize_version_for<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, VersionRange>, D::Error> {
    let entries = IndexMap::<String, String>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|(interface_uri, range)| match range.parse::<VersionRange>() {
            Ok(range) => Some((interface_uri, range)),
            Err(e) => {
                warn!(
                    "Skipping version preference for {}: invalid range '{}': {}",
                    interface_uri, range, e
                );
                None
            }
        })
        .collect())
}

/// Logging-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
    /// Write to [`log_path`] instead of stderr
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
            file: false,
        }
    }
}

impl Config {
    /// Load the config from `path`, falling back to defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config as pretty JSON, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(io_error)?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Apply the persisted restrictions to `requirements`
    pub fn apply_to(&self, requirements: &mut Requirements) -> Result<(), UnsupportedIntersection> {
        for (interface_uri, range) in &self.version_for {
            requirements.add_restriction(interface_uri.clone(), range.clone())?;
        }
        Ok(())
    }
}

/// Returns the path to the config directory.
/// Uses $XDG_CONFIG_HOME/zeroinstall-model if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/zeroinstall-model,
/// or ./zeroinstall-model if neither is available.
pub fn config_dir() -> PathBuf {
    base_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the data directory.
/// Uses $XDG_DATA_HOME/zeroinstall-model if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/zeroinstall-model,
/// or ./zeroinstall-model if neither is available.
pub fn data_dir() -> PathBuf {
    base_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("zeroinstall-model.log")
}

fn base_dir_with_env(
    xdg_home: Option<String>,
    home_dir: Option<PathBuf>,
    home_relative: &str,
) -> PathBuf {
    let base_dir = xdg_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base_dir.join(APP_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "logging": {
                "json": true
            }
        }))
        .unwrap();

        assert_eq!(result.logging.filter, DEFAULT_LOG_FILTER);
        assert!(result.logging.json);
        assert!(!result.logging.file);
        assert!(result.version_for.is_empty());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "logging": {
                "filter": "zeroinstall_model=debug",
                "json": false,
                "file": true
            },
            "versionFor": {
                "https://example.com/lib.xml": "1.0..!2.0"
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                logging: LoggingConfig {
                    filter: "zeroinstall_model=debug".to_string(),
                    json: false,
                    file: true,
                },
                version_for: IndexMap::from([(
                    "https://example.com/lib.xml".to_string(),
                    "1.0..!2.0".parse().unwrap()
                )]),
            }
        );
    }

    #[test]
    fn config_with_invalid_range_skips_only_that_entry() {
        let result = serde_json::from_value::<Config>(json!({
            "versionFor": {
                "https://example.com/broken.xml": "1.0..2.0",
                "https://example.com/lib.xml": "1.0..!2.0"
            }
        }))
        .unwrap();

        assert_eq!(
            result.version_for,
            IndexMap::from([(
                "https://example.com/lib.xml".to_string(),
                "1.0..!2.0".parse().unwrap()
            )])
        );
    }

    #[test]
    fn load_keeps_logging_settings_despite_invalid_range() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "logging": { "filter": "debug", "file": true },
                "versionFor": {
                    "https://example.com/lib.xml": "..!2.0",
                    "https://example.com/broken.xml": "pre1"
                }
            }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.logging.filter, "debug");
        assert!(config.logging.file);
        assert_eq!(
            config.version_for.keys().collect::<Vec<_>>(),
            vec!["https://example.com/lib.xml"]
        );
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("missing.json")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_then_load_preserves_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.json");
        let mut config = Config::default();
        config.logging.file = true;
        config.version_for.insert(
            "https://example.com/lib.xml".to_string(),
            "..!2.0|3.0".parse().unwrap(),
        );

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn load_reports_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn apply_to_adds_persisted_restrictions() {
        let mut config = Config::default();
        config.version_for.insert(
            "https://example.com/lib.xml".to_string(),
            "1.0..".parse().unwrap(),
        );
        let mut requirements = Requirements::new("https://example.com/app.xml");
        requirements
            .add_restriction("https://example.com/lib.xml", "..!2.0".parse().unwrap())
            .unwrap();

        config.apply_to(&mut requirements).unwrap();

        assert_eq!(
            requirements
                .restriction_for("https://example.com/lib.xml")
                .map(ToString::to_string),
            Some("1.0..!2.0".to_string())
        );
    }

    #[test]
    fn base_dir_with_env_uses_xdg_home_when_set() {
        let path = base_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
            ".config",
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/zeroinstall-model"));
    }

    #[test]
    fn base_dir_with_env_falls_back_to_home() {
        let path = base_dir_with_env(None, Some(PathBuf::from("/home/user")), ".local/share");

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/zeroinstall-model")
        );
    }

    #[test]
    fn base_dir_with_env_ignores_empty_xdg_home() {
        let path = base_dir_with_env(Some(String::new()), Some(PathBuf::from("/home/user")), ".config");

        assert_eq!(path, PathBuf::from("/home/user/.config/zeroinstall-model"));
    }

    #[test]
    fn base_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = base_dir_with_env(None, None, ".config");
        assert_eq!(path, PathBuf::from("./zeroinstall-model"));
    }

    #[test]
    #[serial]
    fn config_path_follows_xdg_config_home() {
        let temp_dir = TempDir::new().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        // SAFETY: serialized with every other test touching the environment
        unsafe { std::env::set_var("XDG_CONFIG_HOME", temp_dir.path()) };

        let path = config_path();

        match previous {
            Some(value) => unsafe { std::env::set_var("XDG_CONFIG_HOME", value) },
            None => unsafe { std::env::remove_var("XDG_CONFIG_HOME") },
        }
        assert_eq!(path, temp_dir.path().join("zeroinstall-model/config.json"));
    }
}
