// Inspect interactor - Reports duration and selectable streams of a file

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::error::{FragcutError, FragcutResult};
use crate::ports::*;
use crate::streams::{CatalogBuilder, StreamCatalog};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Yaml,
}

/// What `inspect` found out about a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub input_path: String,
    /// Canonical `HH:MM:SS.mmm`
    pub duration: String,
    #[serde(flatten)]
    pub catalog: StreamCatalog,
}

/// Interactor for media file inspection
pub struct InspectInteractor {
    probe_port: Arc<dyn ProbePort>,
}

impl InspectInteractor {
    /// Create new inspect interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>) -> Self {
        Self { probe_port }
    }

    /// Probe the file. Unlike an interactive cut, probe failures are errors here.
    pub fn inspect(&self, input_path: &str) -> Result<InspectReport, DomainError> {
        info!(path = %input_path, "Inspecting media file");

        let duration = self.probe_port.probe_duration(input_path)?;
        let streams = self.probe_port.probe_streams(input_path)?;
        let catalog = CatalogBuilder::build(&streams);

        Ok(InspectReport {
            input_path: input_path.to_string(),
            duration: duration.to_canonical(),
            catalog,
        })
    }

    /// Render a report in the requested format
    pub fn render(&self, report: &InspectReport, format: ReportFormat) -> FragcutResult<String> {
        match format {
            ReportFormat::Json => serde_json::to_string_pretty(report).map_err(|e| {
                FragcutError::SerializationError {
                    message: format!("JSON serialization failed: {}", e),
                }
            }),
            ReportFormat::Yaml => serde_yaml::to_string(report).map_err(|e| {
                FragcutError::SerializationError {
                    message: format!("YAML serialization failed: {}", e),
                }
            }),
            ReportFormat::Text => Ok(Self::format_as_text(report)),
        }
    }

    fn format_as_text(report: &InspectReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("File: {}\n", report.input_path));
        output.push_str(&format!("Duration: {}\n", report.duration));

        for (heading, kind) in [("Audio streams", StreamKind::Audio), ("Subtitles", StreamKind::Subtitle)] {
            let streams = report.catalog.streams(kind);
            output.push_str(&format!("\n{} ({}):\n", heading, streams.len()));
            if streams.is_empty() {
                output.push_str("  none\n");
            }
            for stream in streams {
                output.push_str(&format!("  {}\n", stream));
            }
        }

        output
    }
}
