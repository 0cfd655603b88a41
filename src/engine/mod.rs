//! Cut command construction
//!
//! The engine never touches media itself. It turns a [`FragmentRequest`]
//! into the exact argument list for an ffmpeg stream-copy run.
//!
//! [`FragmentRequest`]: crate::domain::model::FragmentRequest

use serde::{Deserialize, Serialize};

pub mod copy;

pub use copy::StreamCopyClipper;

/// Options shared by every command the engine builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pass `-y` so an existing output file is replaced without asking
    pub overwrite: bool,
    /// Value for ffmpeg's `-loglevel`; `None` leaves ffmpeg's default
    pub loglevel: Option<String>,
    /// Reject selected indices that are not in the catalog instead of
    /// passing them through to ffmpeg
    pub strict_stream_selection: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overwrite: true,
            loglevel: Some("quiet".to_string()),
            strict_stream_selection: false,
        }
    }
}

/// Result of building a cut command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Arguments for ffmpeg, program name excluded
    pub args: Vec<String>,
    /// File name of the fragment
    pub output_name: String,
    /// Fragment path, next to the input file
    pub output_path: String,
}

impl BuildResult {
    /// Human-readable command line. Only for display: arguments holding
    /// whitespace or quotes are wrapped in double quotes.
    pub fn command_line(&self, program: &str) -> String {
        std::iter::once(program)
            .chain(self.args.iter().map(String::as_str))
            .map(display_arg)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn display_arg(arg: &str) -> String {
    if arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '"' || c == '\'') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
