//! CLI module for fragcut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

pub use args::{ClipArgs, InspectArgs, OutputFormat};

/// fragcut - cut a piece out of a video without re-encoding
///
/// Run without a subcommand for the interactive session.
#[derive(Parser, Debug)]
#[command(name = "fragcut")]
#[command(about = "Cut a time range out of a media file with ffmpeg stream copy")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, env = "FRAGCUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Logging format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// ffmpeg executable
    #[arg(long, global = true)]
    pub ffmpeg: Option<String>,

    /// ffprobe executable
    #[arg(long, global = true)]
    pub ffprobe: Option<String>,

    /// Reject stream indices the file does not have
    #[arg(long, global = true)]
    pub strict: bool,

    /// Print the ffmpeg command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// The command to execute; none starts the interactive session
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cut a fragment without prompting
    Clip(ClipArgs),
    /// Show duration and selectable streams of a file
    Inspect(InspectArgs),
}
