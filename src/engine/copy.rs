//! Stream copy command builder

use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::{FragmentRequest, StreamKind, TimeSpec};
use crate::domain::rules::SelectionRules;
use crate::engine::{BuildResult, EngineConfig};
use crate::streams::StreamCatalog;
use crate::utils::path::PathUtils;

/// Builds lossless (`-c copy`) cut commands
pub struct StreamCopyClipper {
    config: EngineConfig,
    paths: PathUtils,
}

impl StreamCopyClipper {
    /// Create a new stream copy clipper
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            paths: PathUtils::new(),
        }
    }

    /// Build the ffmpeg arguments for `request`.
    ///
    /// Argument order is fixed: global flags, seek and input, duration,
    /// video map, audio maps, subtitle maps, codec, output. Selected indices
    /// keep the order they were given in. They are only checked against the
    /// catalog when strict stream selection is on; otherwise an unknown index
    /// reaches ffmpeg unchanged and the cut fails there.
    pub fn build(&self, request: &FragmentRequest, catalog: &StreamCatalog) -> Result<BuildResult, DomainError> {
        if self.config.strict_stream_selection {
            SelectionRules::validate(StreamKind::Audio, &request.audio, catalog.audio.len())?;
            SelectionRules::validate(StreamKind::Subtitle, &request.subtitles, catalog.subtitles.len())?;
        }

        let output_name = self.paths.fragment_file_name(
            &request.input_path,
            &request.start.label,
            request.end.as_ref().map(|end| end.label.as_str()),
        );
        let output_path = self.paths.sibling_path(&request.input_path, &output_name);

        let mut args = Vec::new();
        if self.config.overwrite {
            args.push("-y".to_string());
        }
        if let Some(level) = &self.config.loglevel {
            args.extend(["-loglevel".to_string(), level.clone()]);
        }

        args.extend([
            "-ss".to_string(),
            request.start.value.to_canonical(),
            "-i".to_string(),
            request.input_path.clone(),
        ]);

        if let Some(end) = &request.end {
            let length = TimeSpec::subtract(end.value, request.start.value)?;
            args.extend(["-t".to_string(), length.to_canonical()]);
        }

        args.extend(["-map".to_string(), "0:v:0".to_string()]);
        args.extend(Self::stream_maps(StreamKind::Audio, &request.audio));
        args.extend(Self::stream_maps(StreamKind::Subtitle, &request.subtitles));

        args.extend(["-c".to_string(), "copy".to_string(), output_path.clone()]);

        debug!(args = ?args, output = %output_path, "Built stream copy command");

        Ok(BuildResult {
            args,
            output_name,
            output_path,
        })
    }

    fn stream_maps(kind: StreamKind, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .flat_map(|index| ["-map".to_string(), format!("0:{}:{}", kind.specifier(), index)])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TimeInput;
    use crate::probe::ProbeStream;
    use crate::streams::CatalogBuilder;

    fn catalog() -> StreamCatalog {
        CatalogBuilder::build(&[
            ProbeStream::new("video"),
            ProbeStream::new("audio").with_tag("language", "eng"),
            ProbeStream::new("subtitle").with_tag("language", "fre"),
            ProbeStream::new("audio").with_tag("language", "spa"),
        ])
    }

    fn request(start: &str, end: Option<&str>, audio: Vec<usize>, subtitles: Vec<usize>) -> FragmentRequest {
        FragmentRequest::new(
            "movie.mkv",
            TimeInput::parse(start).unwrap(),
            end.map(|end| TimeInput::parse(end).unwrap()),
            audio,
            subtitles,
        )
        .unwrap()
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_build_with_end_and_audio() {
        let clipper = StreamCopyClipper::new(EngineConfig::default());
        let result = clipper
            .build(&request("1:00", Some("2:30"), vec![0], vec![]), &catalog())
            .unwrap();

        assert_eq!(result.output_name, "movie from 1:00 to 2:30.mkv");
        assert_eq!(result.output_path, "movie from 1:00 to 2:30.mkv");
        assert_eq!(
            result.args,
            strings(&[
                "-y",
                "-loglevel",
                "quiet",
                "-ss",
                "00:01:00.000",
                "-i",
                "movie.mkv",
                "-t",
                "00:01:30.000",
                "-map",
                "0:v:0",
                "-map",
                "0:a:0",
                "-c",
                "copy",
                "movie from 1:00 to 2:30.mkv",
            ])
        );
    }

    #[test]
    fn test_build_without_end_has_no_duration() {
        let clipper = StreamCopyClipper::new(EngineConfig::default());
        let result = clipper.build(&request("75", None, vec![], vec![]), &catalog()).unwrap();

        assert_eq!(result.output_name, "movie from 75.mkv");
        assert!(!result.args.contains(&"-t".to_string()));
        assert_eq!(
            result.args,
            strings(&[
                "-y",
                "-loglevel",
                "quiet",
                "-ss",
                "00:01:15.000",
                "-i",
                "movie.mkv",
                "-map",
                "0:v:0",
                "-c",
                "copy",
                "movie from 75.mkv",
            ])
        );
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let clipper = StreamCopyClipper::new(EngineConfig::default());
        let result = clipper
            .build(&request("0", None, vec![1, 0], vec![0]), &catalog())
            .unwrap();

        let maps: Vec<&str> = result
            .args
            .windows(2)
            .filter(|pair| pair[0] == "-map")
            .map(|pair| pair[1].as_str())
            .collect();
        assert_eq!(maps, vec!["0:v:0", "0:a:1", "0:a:0", "0:s:0"]);
    }

    #[test]
    fn test_unknown_index_passes_through_by_default() {
        let clipper = StreamCopyClipper::new(EngineConfig::default());
        let result = clipper
            .build(&request("0", None, vec![5], vec![9]), &catalog())
            .unwrap();
        assert!(result.args.contains(&"0:a:5".to_string()));
        assert!(result.args.contains(&"0:s:9".to_string()));
    }

    #[test]
    fn test_unknown_index_rejected_when_strict() {
        let clipper = StreamCopyClipper::new(EngineConfig {
            strict_stream_selection: true,
            ..EngineConfig::default()
        });
        let result = clipper.build(&request("0", None, vec![0], vec![1]), &catalog());
        assert_eq!(
            result,
            Err(DomainError::UnresolvedStreamSelection {
                kind: "subtitle".to_string(),
                index: 1,
                available: 1,
            })
        );
    }

    #[test]
    fn test_global_flags_are_optional() {
        let clipper = StreamCopyClipper::new(EngineConfig {
            overwrite: false,
            loglevel: None,
            strict_stream_selection: false,
        });
        let result = clipper.build(&request("0", None, vec![], vec![]), &catalog()).unwrap();
        assert_eq!(&result.args[..2], &strings(&["-ss", "00:00:00.000"])[..]);
    }

    #[test]
    fn test_output_lands_next_to_input() {
        let clipper = StreamCopyClipper::new(EngineConfig::default());
        let request = FragmentRequest::new(
            "/media/films/movie.mkv",
            TimeInput::parse("10").unwrap(),
            None,
            vec![],
            vec![],
        )
        .unwrap();
        let result = clipper.build(&request, &StreamCatalog::default()).unwrap();

        let expected = std::path::Path::new("/media/films")
            .join("movie from 10.mkv")
            .to_string_lossy()
            .to_string();
        assert_eq!(result.output_path, expected);
        assert_eq!(result.args.last(), Some(&expected));
        assert!(result.args.contains(&"/media/films/movie.mkv".to_string()));
    }

    #[test]
    fn test_build_is_deterministic() {
        let clipper = StreamCopyClipper::new(EngineConfig::default());
        let request = request("1:00", Some("2:30"), vec![1, 0], vec![0]);
        let first = clipper.build(&request, &catalog()).unwrap();
        let second = clipper.build(&request, &catalog()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_length_is_rejected() {
        let clipper = StreamCopyClipper::new(EngineConfig::default());
        let mut request = request("1:00", None, vec![], vec![]);
        request.end = Some(TimeInput::parse("0:30").unwrap());
        assert!(matches!(
            clipper.build(&request, &catalog()),
            Err(DomainError::NegativeDuration { .. })
        ));
    }
}
