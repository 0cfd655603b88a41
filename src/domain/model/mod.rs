// Domain models - Core types and data structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::utils::time::TimeParser;

/// Placeholder shown for stream tags the probe did not report
pub const NOT_AVAILABLE: &str = "N/A";

/// Time position or length with millisecond precision.
///
/// Stored as a plain millisecond count so that every value decomposes into
/// exactly one `hours:minutes:seconds.millis` tuple and converts to and from
/// text without rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpec {
    millis: u64,
}

impl TimeSpec {
    /// The zero time, start of the media
    pub const ZERO: TimeSpec = TimeSpec { millis: 0 };

    /// Create a new TimeSpec from a millisecond count
    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Total milliseconds
    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Create a TimeSpec from hours, minutes, seconds, milliseconds.
    ///
    /// Fields are not range-checked (`1:75` is 135 seconds); returns `None`
    /// only if the total does not fit in a `u64`.
    pub fn from_components(hours: u64, minutes: u64, seconds: u64, millis: u64) -> Option<Self> {
        let total = hours
            .checked_mul(60)?
            .checked_add(minutes)?
            .checked_mul(60)?
            .checked_add(seconds)?
            .checked_mul(1000)?
            .checked_add(millis)?;
        Some(Self { millis: total })
    }

    /// Canonical `(hours, minutes, seconds, millis)` decomposition
    pub fn components(&self) -> (u64, u64, u64, u64) {
        let (seconds, millis) = (self.millis / 1000, self.millis % 1000);
        let (minutes, seconds) = (seconds / 60, seconds % 60);
        let (hours, minutes) = (minutes / 60, minutes % 60);
        (hours, minutes, seconds, millis)
    }

    /// Convert fractional seconds as reported by a probe, rounded to the
    /// nearest millisecond. Negative or non-finite input yields `None`.
    pub fn from_seconds_f64(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() || seconds < 0.0 {
            return None;
        }
        let millis = (seconds * 1000.0).round();
        if millis > u64::MAX as f64 {
            return None;
        }
        Some(Self {
            millis: millis as u64,
        })
    }

    /// Parse user-entered time text
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        TimeParser::new().parse(text)
    }

    /// Format as `HH:MM:SS.mmm`, the exact syntax ffmpeg expects.
    /// Hours keep growing past 99 instead of wrapping.
    pub fn to_canonical(&self) -> String {
        let (hours, minutes, seconds, millis) = self.components();
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis)
    }

    /// Length of the span from `start` to `end`
    pub fn subtract(end: TimeSpec, start: TimeSpec) -> Result<TimeSpec, DomainError> {
        end.millis
            .checked_sub(start.millis)
            .map(TimeSpec::from_millis)
            .ok_or_else(|| DomainError::NegativeDuration {
                start: start.to_canonical(),
                end: end.to_canonical(),
            })
    }

    pub fn is_zero(&self) -> bool {
        self.millis == 0
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_canonical())
    }
}

/// A time as the user typed it, paired with its parsed value.
///
/// The label is what ends up in the output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInput {
    pub label: String,
    pub value: TimeSpec,
}

impl TimeInput {
    /// Parse user text, keeping the trimmed text as label (`0` when empty)
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let trimmed = text.trim();
        let value = TimeSpec::parse(trimmed)?;
        let label = if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        };
        Ok(Self { label, value })
    }

    /// Use the canonical text as label
    pub fn from_time(value: TimeSpec) -> Self {
        Self {
            label: value.to_canonical(),
            value,
        }
    }
}

/// Kind of a user-selectable stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Audio,
    Subtitle,
}

impl StreamKind {
    /// Classify a probe `codec_type`; video and anything else is not selectable
    pub fn from_codec_type(codec_type: &str) -> Option<Self> {
        match codec_type {
            "audio" => Some(StreamKind::Audio),
            "subtitle" => Some(StreamKind::Subtitle),
            _ => None,
        }
    }

    /// Stream specifier letter used in `-map 0:<letter>:<index>`
    pub fn specifier(&self) -> char {
        match self {
            StreamKind::Audio => 'a',
            StreamKind::Subtitle => 's',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StreamKind::Audio => "audio",
            StreamKind::Subtitle => "subtitle",
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audio or subtitle stream of the source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Position within the list of streams of the same kind
    pub index: usize,
    pub kind: StreamKind,
    pub language: Option<String>,
    pub title: Option<String>,
    pub codec: Option<String>,
    /// Index of the stream in the whole file, as reported by the probe
    pub source_index: Option<usize>,
}

impl StreamDescriptor {
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

impl fmt::Display for StreamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Index: {}, Title: {}, Language: {}",
            self.index,
            self.title(),
            self.language()
        )?;
        if let Some(codec) = &self.codec {
            write!(f, ", Codec: {}", codec)?;
        }
        Ok(())
    }
}

/// Everything needed to cut one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRequest {
    pub input_path: String,
    pub start: TimeInput,
    /// `None` cuts to the end of the file
    pub end: Option<TimeInput>,
    /// Audio catalog indices in the order the user gave them
    pub audio: Vec<usize>,
    /// Subtitle catalog indices in the order the user gave them
    pub subtitles: Vec<usize>,
}

impl FragmentRequest {
    /// Create a new request, rejecting an end earlier than the start
    pub fn new(
        input_path: impl Into<String>,
        start: TimeInput,
        end: Option<TimeInput>,
        audio: Vec<usize>,
        subtitles: Vec<usize>,
    ) -> Result<Self, DomainError> {
        let input_path = input_path.into();
        if input_path.trim().is_empty() {
            return Err(DomainError::BadArgs("Input path is empty".to_string()));
        }
        if let Some(end) = &end {
            TimeSpec::subtract(end.value, start.value)?;
        }
        Ok(Self {
            input_path,
            start,
            end,
            audio,
            subtitles,
        })
    }

    /// Length of the fragment, `None` when cutting to the end of the file
    pub fn clip_length(&self) -> Result<Option<TimeSpec>, DomainError> {
        self.end
            .as_ref()
            .map(|end| TimeSpec::subtract(end.value, self.start.value))
            .transpose()
    }
}

#[cfg(test)]
mod tests;
