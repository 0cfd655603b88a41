//! Stream catalog: the audio and subtitle streams a user can pick from

use serde::{Deserialize, Serialize};

use crate::domain::model::{StreamDescriptor, StreamKind};

pub mod catalog;

pub use catalog::CatalogBuilder;

/// Selectable streams of one source file, grouped by kind.
///
/// Video is not listed; the first video stream is always kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCatalog {
    /// Audio streams in file order
    pub audio: Vec<StreamDescriptor>,
    /// Subtitle streams in file order
    pub subtitles: Vec<StreamDescriptor>,
}

impl StreamCatalog {
    /// Streams of one kind
    pub fn streams(&self, kind: StreamKind) -> &[StreamDescriptor] {
        match kind {
            StreamKind::Audio => &self.audio,
            StreamKind::Subtitle => &self.subtitles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.audio.is_empty() && self.subtitles.is_empty()
    }
}
