//! Time parsing for user-entered timestamps
//!
//! Accepted input, tried in this order:
//!
//! - empty text, meaning zero
//! - `S.mmm`: seconds with a fraction and no colon
//! - `S`, `M:S`, `H:M:S`, each optionally followed by `.mmm`
//!
//! Fractions are right-padded to milliseconds (`.5` is 500 ms) and may have
//! at most three digits. Fields are plain unsigned integers and are not
//! range-checked, so `1:75` is 135 seconds.

use crate::domain::errors::DomainError;
use crate::domain::model::TimeSpec;

/// Unit held by each colon-separated field, indexed by field count - 1
const FIELD_LAYOUTS: [&[Unit]; 3] = [
    &[Unit::Seconds],
    &[Unit::Minutes, Unit::Seconds],
    &[Unit::Hours, Unit::Minutes, Unit::Seconds],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Hours,
    Minutes,
    Seconds,
}

/// Shape of a time string after tokenizing
#[derive(Debug, PartialEq, Eq)]
enum TimeForm<'a> {
    Empty,
    /// `S.mmm` with no colon
    Fractional { seconds: &'a str, fraction: &'a str },
    /// `[[H:]M:]S[.mmm]`
    Clock {
        fields: Vec<&'a str>,
        fraction: Option<&'a str>,
    },
}

/// Time parser for user-entered time text
pub struct TimeParser;

impl TimeParser {
    /// Create a new time parser
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeParser {
    /// Parse time text into a TimeSpec
    pub fn parse(&self, text: &str) -> Result<TimeSpec, DomainError> {
        let text = text.trim();
        match Self::tokenize(text)? {
            TimeForm::Empty => Ok(TimeSpec::ZERO),
            TimeForm::Fractional { seconds, fraction } => {
                Self::assemble(text, &[seconds], Some(fraction))
            }
            TimeForm::Clock { fields, fraction } => Self::assemble(text, &fields, fraction),
        }
    }

    fn tokenize(text: &str) -> Result<TimeForm<'_>, DomainError> {
        if text.is_empty() {
            return Ok(TimeForm::Empty);
        }

        let (main, fraction) = match text.split_once('.') {
            Some((main, fraction)) => (main, Some(fraction)),
            None => (text, None),
        };
        if fraction.is_some_and(|f| f.contains(['.', ':'])) {
            return Err(invalid(text));
        }

        match fraction {
            Some(fraction) if !main.contains(':') => Ok(TimeForm::Fractional {
                seconds: main,
                fraction,
            }),
            _ => Ok(TimeForm::Clock {
                fields: main.split(':').collect(),
                fraction,
            }),
        }
    }

    fn assemble(text: &str, fields: &[&str], fraction: Option<&str>) -> Result<TimeSpec, DomainError> {
        let layout = fields
            .len()
            .checked_sub(1)
            .and_then(|i| FIELD_LAYOUTS.get(i))
            .ok_or_else(|| invalid(text))?;

        let (mut hours, mut minutes, mut seconds) = (0, 0, 0);
        for (unit, field) in layout.iter().zip(fields) {
            let value = Self::parse_field(text, field)?;
            match unit {
                Unit::Hours => hours = value,
                Unit::Minutes => minutes = value,
                Unit::Seconds => seconds = value,
            }
        }

        let millis = match fraction {
            Some(fraction) => Self::parse_fraction(text, fraction)?,
            None => 0,
        };

        TimeSpec::from_components(hours, minutes, seconds, millis).ok_or_else(|| invalid(text))
    }

    fn parse_field(text: &str, field: &str) -> Result<u64, DomainError> {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(text));
        }
        field.parse().map_err(|_| invalid(text))
    }

    /// `5` -> 500, `05` -> 50, empty -> 0
    fn parse_fraction(text: &str, fraction: &str) -> Result<u64, DomainError> {
        if fraction.len() > 3 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(text));
        }
        format!("{:0<3}", fraction).parse().map_err(|_| invalid(text))
    }
}

fn invalid(text: &str) -> DomainError {
    DomainError::InvalidTimeFormat(text.to_string())
}
