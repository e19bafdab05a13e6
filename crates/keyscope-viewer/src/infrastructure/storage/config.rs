//! TOML-based configuration persistence for the viewer application.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Linux:    `~/.config/keyscope/config.toml`
//! - macOS:    `~/Library/Application Support/KeyScope/config.toml`
//! - Windows:  `%APPDATA%\KeyScope\config.toml`
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return
//! value of `some_fn()` when absent from the file, so the app works on
//! first run and after upgrades that add newer fields.

use std::path::PathBuf;

use keyscope_core::DisplayMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub viewer: ViewerConfig,
    pub log: LogConfig,
}

/// Event viewer behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Numeric display mode for usage values: `"decimal"` or `"hex"`.
    #[serde(default = "default_display_mode")]
    pub display_mode: String,
    /// Capacity of the historical event viewer.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Capacity of the live event queue.
    #[serde(default = "default_live_queue_capacity")]
    pub live_queue_capacity: usize,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Log monitor settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Path of the daemon log file to monitor. Absent disables the monitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Poll interval for re-reading the log file, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// Maximum number of lines kept per delivered window.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

impl ViewerConfig {
    /// The parsed display mode; anything other than `"hex"` means decimal.
    pub fn display_mode(&self) -> DisplayMode {
        if self.display_mode.eq_ignore_ascii_case("hex") {
            DisplayMode::Hex
        } else {
            DisplayMode::Decimal
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_display_mode() -> String {
    "decimal".to_string()
}
fn default_history_capacity() -> usize {
    32
}
fn default_live_queue_capacity() -> usize {
    256
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_poll_interval_ms() -> u64 {
    1000
}
fn default_max_lines() -> usize {
    256
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewer: ViewerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            display_mode: default_display_mode(),
            history_capacity: default_history_capacity(),
            live_queue_capacity: default_live_queue_capacity(),
            log_level: default_log_level(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            poll_interval_ms: default_poll_interval_ms(),
            max_lines: default_max_lines(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from disk, returning `AppConfig::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk, creating the config directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("KeyScope"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("keyscope"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("KeyScope")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_capacities_match_the_two_viewer_variants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.viewer.history_capacity, 32);
        assert_eq!(cfg.viewer.live_queue_capacity, 256);
    }

    #[test]
    fn test_default_display_mode_is_decimal() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.viewer.display_mode(), DisplayMode::Decimal);
    }

    #[test]
    fn test_default_log_monitor_is_disabled() {
        let cfg = AppConfig::default();
        assert!(cfg.log.path.is_none());
        assert_eq!(cfg.log.poll_interval_ms, 1000);
        assert_eq!(cfg.log.max_lines, 256);
    }

    #[test]
    fn test_display_mode_parsing_is_case_insensitive() {
        let mut cfg = ViewerConfig::default();
        cfg.display_mode = "HEX".to_string();
        assert_eq!(cfg.display_mode(), DisplayMode::Hex);

        cfg.display_mode = "anything-else".to_string();
        assert_eq!(cfg.display_mode(), DisplayMode::Decimal);
    }

    // ── TOML round-trip ───────────────────────────────────────────────────────

    #[test]
    fn test_app_config_serializes_and_deserializes_round_trip() {
        // Arrange
        let mut cfg = AppConfig::default();
        cfg.viewer.display_mode = "hex".to_string();
        cfg.log.path = Some(PathBuf::from("/var/log/keyscope/daemon.log"));

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_absent_log_path_is_omitted_from_toml() {
        let cfg = AppConfig::default();
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        assert!(!toml_str.contains("path"), "None path must be omitted");
    }

    #[test]
    fn test_deserialize_minimal_toml_uses_defaults() {
        let toml_str = r#"
[viewer]
[log]
"#;
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize minimal");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_deserialize_partial_viewer_overrides_defaults() {
        let toml_str = r#"
[viewer]
history_capacity = 16
[log]
"#;
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize partial");
        assert_eq!(cfg.viewer.history_capacity, 16);
        // Unspecified fields keep their defaults
        assert_eq!(cfg.viewer.live_queue_capacity, 256);
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        let bad_toml = "[[[ not valid toml";
        let result: Result<AppConfig, toml::de::Error> = toml::from_str(bad_toml);
        assert!(result.is_err());
    }

    // ── Save / load via temp directory ───────────────────────────────────────

    #[test]
    fn test_save_and_load_config_round_trip_via_temp_dir() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("keyscope_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.viewer.log_level = "debug".to_string();
        cfg.log.poll_interval_ms = 250;

        // Act – serialize and write manually (mirrors save_config logic)
        let content = toml::to_string_pretty(&cfg).unwrap();
        std::fs::write(&path, &content).unwrap();
        let loaded: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        // Assert
        assert_eq!(loaded.viewer.log_level, "debug");
        assert_eq!(loaded.log.poll_interval_ms, 250);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir in a stripped CI environment is also acceptable.
    }
}
