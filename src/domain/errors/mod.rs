// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Time text matches none of the accepted syntaxes
    InvalidTimeFormat(String),
    /// A clip length would come out negative (end earlier than start)
    NegativeDuration { start: String, end: String },
    /// A selected catalog index has no matching stream
    UnresolvedStreamSelection {
        kind: String,
        index: usize,
        available: usize,
    },
    /// A stream selection entry is not a catalog index
    InvalidSelection(String),
    /// An external tool (probe or cut) failed
    ExternalToolFailure(String),
    /// Invalid arguments provided
    BadArgs(String),
    /// The console input was closed while waiting for an answer
    InputClosed,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidTimeFormat(text) => write!(
                f,
                "Invalid time format: '{}'. Expected seconds (75), seconds.ms (12.100), MM:SS[.ms] or HH:MM:SS[.ms]",
                text
            ),
            DomainError::NegativeDuration { start, end } => {
                write!(f, "End time {} is earlier than start time {}", end, start)
            }
            DomainError::UnresolvedStreamSelection {
                kind,
                index,
                available,
            } => write!(
                f,
                "No {} stream with index {} ({} available)",
                kind, index, available
            ),
            DomainError::InvalidSelection(msg) => write!(f, "Invalid selection: {}", msg),
            DomainError::ExternalToolFailure(msg) => write!(f, "External tool failed: {}", msg),
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::InputClosed => write!(f, "Input closed before an answer was given"),
        }
    }
}

impl std::error::Error for DomainError {}
