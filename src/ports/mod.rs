// Ports - Interface definitions (contracts) for the outside world

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::engine::BuildResult;
use crate::probe::ProbeStream;

/// Port for media file probing
pub trait ProbePort: Send + Sync {
    /// Stream records of the file, in file order
    fn probe_streams(&self, file_path: &str) -> Result<Vec<ProbeStream>, DomainError>;

    /// Total duration of the file
    fn probe_duration(&self, file_path: &str) -> Result<TimeSpec, DomainError>;
}

/// Port for running a built cut command
pub trait ExecutePort: Send + Sync {
    /// Program the arguments are handed to, used when echoing the command
    fn program(&self) -> &str;

    /// Run the command to completion. A non-zero exit is an
    /// `ExternalToolFailure`; nothing is cleaned up afterwards.
    fn execute(&self, command: &BuildResult) -> Result<(), DomainError>;
}

/// Port for talking to the user
pub trait PromptPort: Send + Sync {
    /// Show `prompt` and read one line of answer, without the line ending
    fn ask(&self, prompt: &str) -> Result<String, DomainError>;

    /// Show one line of output
    fn say(&self, line: &str);
}
