//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use crate::adapters::{FragcutConfig, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::{FragcutError, FragcutResult};

/// Final configuration and where it came from
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: FragcutConfig,
    /// File the settings were read from, if any
    pub file: Option<PathBuf>,
    /// Number of settings taken from the environment
    pub env_overrides: usize,
}

/// Resolve configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> FragcutResult<ResolvedConfig> {
    let (mut config, file) = load_config_file(cli)?;
    let env_overrides = apply_environment_overrides(&mut config, |key| std::env::var(key).ok())?;
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    Ok(ResolvedConfig {
        config,
        file,
        env_overrides,
    })
}

/// Load the explicit config file, or the first default location that exists
fn load_config_file(cli: &Cli) -> FragcutResult<(FragcutConfig, Option<PathBuf>)> {
    if let Some(path) = &cli.config {
        return Ok((TomlConfigAdapter::load(path)?, Some(path.clone())));
    }

    for path in TomlConfigAdapter::default_config_paths() {
        if path.is_file() {
            let config = TomlConfigAdapter::load(&path)?;
            return Ok((config, Some(path)));
        }
    }

    Ok((FragcutConfig::default(), None))
}

/// Apply `FRAGCUT_*` variables; returns how many were set
pub fn apply_environment_overrides<F>(config: &mut FragcutConfig, lookup: F) -> FragcutResult<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let mut env_overrides = 0;

    let strings: [(&str, &mut String); 5] = [
        ("FRAGCUT_FFMPEG", &mut config.ffmpeg_path),
        ("FRAGCUT_FFPROBE", &mut config.ffprobe_path),
        ("FRAGCUT_FFMPEG_LOGLEVEL", &mut config.ffmpeg_loglevel),
        ("FRAGCUT_LOG_LEVEL", &mut config.log_level),
        ("FRAGCUT_LOG_FORMAT", &mut config.log_format),
    ];
    for (env_var, target) in strings {
        if let Some(value) = lookup(env_var) {
            *target = value;
            env_overrides += 1;
        }
    }

    let flags: [(&str, &mut bool); 2] = [
        ("FRAGCUT_OVERWRITE", &mut config.overwrite),
        ("FRAGCUT_STRICT_SELECTION", &mut config.strict_stream_selection),
    ];
    for (env_var, target) in flags {
        if let Some(value) = lookup(env_var) {
            *target = parse_bool(env_var, &value)?;
            env_overrides += 1;
        }
    }

    Ok(env_overrides)
}

/// Apply command-line options on top of everything else
pub fn apply_cli_overrides(config: &mut FragcutConfig, cli: &Cli) {
    if let Some(ffmpeg) = &cli.ffmpeg {
        config.ffmpeg_path = ffmpeg.clone();
    }
    if let Some(ffprobe) = &cli.ffprobe {
        config.ffprobe_path = ffprobe.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    if cli.strict {
        config.strict_stream_selection = true;
    }
}

fn parse_bool(env_var: &str, value: &str) -> FragcutResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(FragcutError::ConfigError {
            message: format!("Invalid boolean value for {}: {}", env_var, value),
        }),
    }
}
