//! Probe output model
//!
//! Mirrors the parts of `ffprobe -print_format json -show_streams` output the
//! stream catalog needs. Unknown fields are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::TimeSpec;

/// Top-level probe response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// Stream records in file order
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

/// One stream record as reported by the probe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeStream {
    /// Global stream index within the file
    pub index: Option<usize>,
    /// `video`, `audio`, `subtitle`, `data`, `attachment`...
    pub codec_type: Option<String>,
    pub codec_name: Option<String>,
    /// Free-form tags; `language` and `title` are the ones shown to the user
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl ProbeStream {
    /// Create a record of the given type without tags
    pub fn new(codec_type: &str) -> Self {
        Self {
            codec_type: Some(codec_type.to_string()),
            ..Self::default()
        }
    }

    /// Builder-style tag setter
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// Parse the JSON printed by `ffprobe -print_format json -show_streams`
pub fn parse_streams_json(json: &str) -> Result<Vec<ProbeStream>, DomainError> {
    let response: ProbeResponse = serde_json::from_str(json).map_err(|e| {
        DomainError::ExternalToolFailure(format!("Unreadable probe output: {}", e))
    })?;
    Ok(response.streams)
}

/// Parse the bare seconds value printed by
/// `ffprobe -show_entries format=duration -of default=noprint_wrappers=1:nokey=1`
pub fn parse_duration_output(output: &str) -> Result<TimeSpec, DomainError> {
    let text = output.trim();
    text.parse::<f64>()
        .ok()
        .and_then(TimeSpec::from_seconds_f64)
        .ok_or_else(|| DomainError::ExternalToolFailure(format!("Unreadable duration: '{}'", text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_streams_json() {
        let json = r#"{
            "streams": [
                {"index": 0, "codec_name": "h264", "codec_type": "video", "width": 1920},
                {"index": 1, "codec_name": "aac", "codec_type": "audio",
                 "tags": {"language": "eng", "title": "Stereo"}},
                {"index": 2, "codec_name": "subrip", "codec_type": "subtitle"}
            ]
        }"#;

        let streams = parse_streams_json(json).unwrap();
        assert_eq!(streams.len(), 3);
        assert_eq!(streams[0].codec_type.as_deref(), Some("video"));
        assert_eq!(streams[1].tag("language"), Some("eng"));
        assert_eq!(streams[1].tag("title"), Some("Stereo"));
        assert_eq!(streams[2].index, Some(2));
        assert!(streams[2].tags.is_empty());
    }

    #[test]
    fn test_parse_streams_json_without_streams() {
        assert!(parse_streams_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_streams_json_garbage() {
        assert!(matches!(
            parse_streams_json("not json"),
            Err(DomainError::ExternalToolFailure(_))
        ));
    }

    #[test]
    fn test_parse_duration_output() {
        assert_eq!(
            parse_duration_output("5025.123000\n").unwrap(),
            TimeSpec::from_millis(5_025_123)
        );
        assert!(parse_duration_output("N/A").is_err());
        assert!(parse_duration_output("").is_err());
    }
}
