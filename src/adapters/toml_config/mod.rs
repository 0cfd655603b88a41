// TOML config adapter - Configuration file loading

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::error::{FragcutError, FragcutResult};
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Log levels ffmpeg accepts for `-loglevel`
const FFMPEG_LOGLEVELS: &[&str] = &[
    "quiet", "panic", "fatal", "error", "warning", "info", "verbose", "debug", "trace",
];

/// Settings read from the `[fragcut]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragcutConfig {
    /// ffmpeg executable
    pub ffmpeg_path: String,
    /// ffprobe executable
    pub ffprobe_path: String,
    /// Passed to ffmpeg as `-loglevel`
    pub ffmpeg_loglevel: String,
    /// Replace an existing output file (`-y`)
    pub overwrite: bool,
    /// Reject stream indices the file does not have
    pub strict_stream_selection: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Default for FragcutConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
            ffmpeg_loglevel: "quiet".to_string(),
            overwrite: true,
            strict_stream_selection: false,
            log_level: "warn".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl FragcutConfig {
    /// Validate configuration
    pub fn validate(&self) -> FragcutResult<()> {
        if self.ffmpeg_path.trim().is_empty() {
            return Err(config_error("ffmpeg_path cannot be empty"));
        }
        if self.ffprobe_path.trim().is_empty() {
            return Err(config_error("ffprobe_path cannot be empty"));
        }
        if !FFMPEG_LOGLEVELS.contains(&self.ffmpeg_loglevel.as_str()) {
            return Err(config_error(&format!(
                "Invalid ffmpeg_loglevel: {}. Valid levels: {}",
                self.ffmpeg_loglevel,
                FFMPEG_LOGLEVELS.join(", ")
            )));
        }
        self.logging_config()?;
        Ok(())
    }

    /// Options for the command builder
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            overwrite: self.overwrite,
            loglevel: Some(self.ffmpeg_loglevel.clone()),
            strict_stream_selection: self.strict_stream_selection,
        }
    }

    /// Options for the logging system
    pub fn logging_config(&self) -> FragcutResult<LoggingConfig> {
        Ok(LoggingConfig {
            level: LogLevel::parse(&self.log_level)?,
            format: LogFormat::parse(&self.log_format)?,
        })
    }
}

/// On-disk layout: everything lives under `[fragcut]`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    fragcut: FragcutConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> FragcutResult<FragcutConfig> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| config_error(&format!("Failed to parse TOML config: {}", e)))?;
        Ok(file.fragcut)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> FragcutResult<FragcutConfig> {
        if !path.exists() {
            return Err(FragcutError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Places searched when no file is given explicitly, in order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("fragcut.toml")];

        // On Windows, use %APPDATA%/fragcut/config.toml
        if let Some(appdata) = std::env::var_os("APPDATA") {
            paths.push(PathBuf::from(appdata).join("fragcut").join("config.toml"));
        } else if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join("fragcut").join("config.toml"));
        } else if let Some(home) = std::env::var_os("HOME") {
            paths.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("fragcut")
                    .join("config.toml"),
            );
        }

        paths
    }
}

fn config_error(message: &str) -> FragcutError {
    FragcutError::ConfigError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = TomlConfigAdapter::parse(
            r#"
            [fragcut]
            ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg"
            strict_stream_selection = true
            "#,
        )
        .unwrap();

        assert_eq!(config.ffmpeg_path, "/opt/ffmpeg/bin/ffmpeg");
        assert!(config.strict_stream_selection);
        assert_eq!(config.ffprobe_path, "ffprobe");
        assert_eq!(config.ffmpeg_loglevel, "quiet");
        assert!(config.overwrite);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(TomlConfigAdapter::parse("").unwrap(), FragcutConfig::default());
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(matches!(
            TomlConfigAdapter::parse("[fragcut\nffmpeg_path ="),
            Err(FragcutError::ConfigError { .. })
        ));
        assert!(matches!(
            TomlConfigAdapter::parse("[fragcut]\noverwrite = \"sometimes\""),
            Err(FragcutError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[fragcut]\nffmpeg_loglevel = \"error\"\noverwrite = false").unwrap();

        let config = TomlConfigAdapter::load(file.path()).unwrap();
        assert_eq!(config.ffmpeg_loglevel, "error");
        assert!(!config.overwrite);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TomlConfigAdapter::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(FragcutError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_validate() {
        assert!(FragcutConfig::default().validate().is_ok());

        let bad_loglevel = FragcutConfig {
            ffmpeg_loglevel: "chatty".to_string(),
            ..FragcutConfig::default()
        };
        assert!(bad_loglevel.validate().is_err());

        let bad_log_level = FragcutConfig {
            log_level: "loud".to_string(),
            ..FragcutConfig::default()
        };
        assert!(bad_log_level.validate().is_err());

        let empty_ffmpeg = FragcutConfig {
            ffmpeg_path: " ".to_string(),
            ..FragcutConfig::default()
        };
        assert!(empty_ffmpeg.validate().is_err());
    }

    #[test]
    fn test_engine_config() {
        let config = FragcutConfig {
            overwrite: false,
            strict_stream_selection: true,
            ..FragcutConfig::default()
        };
        let engine = config.engine_config();
        assert!(!engine.overwrite);
        assert!(engine.strict_stream_selection);
        assert_eq!(engine.loglevel.as_deref(), Some("quiet"));
    }
}
