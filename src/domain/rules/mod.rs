// Domain rules - Policies applied to user input before a request is built

use crate::domain::errors::*;
use crate::domain::model::*;

/// Rules for turning stream selection answers into catalog indices
pub struct SelectionRules;

impl SelectionRules {
    /// Parse whitespace-separated catalog indices, keeping the user's order.
    /// Empty text is a valid empty selection.
    pub fn parse_indices(text: &str) -> Result<Vec<usize>, DomainError> {
        text.split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| {
                    DomainError::InvalidSelection(format!("'{}' is not a stream index", token))
                })
            })
            .collect()
    }

    /// Check every index against the number of streams of that kind
    pub fn validate(kind: StreamKind, indices: &[usize], available: usize) -> Result<(), DomainError> {
        match indices.iter().find(|&&index| index >= available) {
            Some(&index) => Err(DomainError::UnresolvedStreamSelection {
                kind: kind.to_string(),
                index,
                available,
            }),
            None => Ok(()),
        }
    }
}

/// Rules for interpreting entered start and end times
pub struct TimeRangeRules;

impl TimeRangeRules {
    /// An end time of zero (including an empty answer) means "to the end of the file"
    pub fn resolve_end(end: TimeInput) -> Option<TimeInput> {
        if end.value.is_zero() {
            None
        } else {
            Some(end)
        }
    }

    /// Whether the start lies beyond a known media duration.
    /// A zero duration means the probe could not tell, so nothing is past it.
    pub fn starts_past_end(start: TimeSpec, duration: TimeSpec) -> bool {
        !duration.is_zero() && start > duration
    }
}
