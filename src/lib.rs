//! fragcut Library
//!
//! Cuts a time range out of a media file with an ffmpeg stream copy. The
//! library turns free-form time input and a stream selection into an exact
//! ffmpeg argument list; probing and cutting are delegated to ffprobe and
//! ffmpeg through the ports in [`ports`].

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod probe;
pub mod streams;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{FragmentRequest, StreamDescriptor, StreamKind, TimeInput, TimeSpec};
pub use engine::{BuildResult, EngineConfig, StreamCopyClipper};
pub use error::{FragcutError, FragcutResult};
pub use streams::{CatalogBuilder, StreamCatalog};
