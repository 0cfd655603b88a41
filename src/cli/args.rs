//! Command-line argument definitions

use clap::{Args, ValueEnum};

use crate::app::ReportFormat;

/// Arguments for the clip command
#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Start time (75, 12.100, 1:12, 1:12.50 or 1:01:12.500)
    #[arg(short, long, default_value = "")]
    pub start: String,

    /// End time; omit (or give 0) to cut to the end of the file
    #[arg(short, long)]
    pub end: Option<String>,

    /// Audio stream indices to keep, in output order (e.g. --audio 1,0)
    #[arg(short, long, value_delimiter = ',')]
    pub audio: Vec<usize>,

    /// Subtitle stream indices to keep, in output order
    #[arg(long, value_delimiter = ',')]
    pub subs: Vec<usize>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output formats for reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Yaml => ReportFormat::Yaml,
        }
    }
}
