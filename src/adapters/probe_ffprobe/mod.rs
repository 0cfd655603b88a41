//! FFprobe adapter for media file probing
//!
//! Runs the `ffprobe` executable and reads its JSON / plain output.

use std::process::{Command, Output};

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::probe::{self, ProbeStream};

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: String,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter running `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String, DomainError> {
        debug!(program = %self.program, ?args, "Running probe");
        let output: Output = Command::new(&self.program).args(args).output().map_err(|e| {
            DomainError::ExternalToolFailure(format!("Failed to start {}: {}", self.program, e))
        })?;

        if !output.status.success() {
            return Err(DomainError::ExternalToolFailure(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ProbePort for FFprobeAdapter {
    fn probe_streams(&self, file_path: &str) -> Result<Vec<ProbeStream>, DomainError> {
        let stdout = self.run(&[
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            file_path,
        ])?;
        probe::parse_streams_json(&stdout)
    }

    fn probe_duration(&self, file_path: &str) -> Result<TimeSpec, DomainError> {
        let stdout = self.run(&[
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
            file_path,
        ])?;
        probe::parse_duration_output(&stdout)
    }
}
