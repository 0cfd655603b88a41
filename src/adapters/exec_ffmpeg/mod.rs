//! FFmpeg execution adapter
//!
//! Runs the built argument list directly, without a shell, so paths with
//! spaces or quotes need no escaping.

use std::process::Command;

use tracing::{debug, error};

use crate::domain::errors::*;
use crate::engine::BuildResult;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    program: String,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter running `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ExecutePort for FFmpegAdapter {
    fn program(&self) -> &str {
        &self.program
    }

    fn execute(&self, command: &BuildResult) -> Result<(), DomainError> {
        debug!(program = %self.program, args = ?command.args, "Running cut");

        // stdio is inherited so ffmpeg's own diagnostics reach the user
        let status = Command::new(&self.program)
            .args(&command.args)
            .status()
            .map_err(|e| {
                DomainError::ExternalToolFailure(format!("Failed to start {}: {}", self.program, e))
            })?;

        if status.success() {
            Ok(())
        } else {
            error!(program = %self.program, %status, "Cut failed");
            Err(DomainError::ExternalToolFailure(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}
