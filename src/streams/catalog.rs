//! Probe records to stream catalog

use tracing::debug;

use crate::domain::model::{StreamDescriptor, StreamKind};
use crate::probe::ProbeStream;
use crate::streams::StreamCatalog;

/// Builds a [`StreamCatalog`] out of raw probe records
pub struct CatalogBuilder;

impl CatalogBuilder {
    /// Partition records into audio and subtitle lists.
    ///
    /// Catalog indices count streams of the same kind only, so the second
    /// audio stream is `1` whatever its position in the file. Records of any
    /// other type are skipped, and an empty record list gives an empty
    /// catalog.
    pub fn build(records: &[ProbeStream]) -> StreamCatalog {
        let mut catalog = StreamCatalog::default();

        for record in records {
            let Some(kind) = record.codec_type.as_deref().and_then(StreamKind::from_codec_type) else {
                continue;
            };
            let list = match kind {
                StreamKind::Audio => &mut catalog.audio,
                StreamKind::Subtitle => &mut catalog.subtitles,
            };
            list.push(StreamDescriptor {
                index: list.len(),
                kind,
                language: record.tag("language").map(str::to_string),
                title: record.tag("title").map(str::to_string),
                codec: record.codec_name.clone(),
                source_index: record.index,
            });
        }

        debug!(
            records = records.len(),
            audio = catalog.audio.len(),
            subtitles = catalog.subtitles.len(),
            "Built stream catalog"
        );
        catalog
    }
}
