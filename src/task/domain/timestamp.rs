//! Parsing and formatting of the `YYYY-MM-DDTHH:MM` form wire format.

use super::TaskDomainError;
use chrono::NaiveDateTime;

/// Format used by `datetime-local` form inputs.
pub const FORM_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Variant some browsers submit when the input carries a seconds step.
const FORM_TIMESTAMP_WITH_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a form timestamp.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTimestamp`] naming `field` when the
/// value is blank or matches neither accepted format.
pub fn parse_form_timestamp(
    field: &'static str,
    raw: &str,
) -> Result<NaiveDateTime, TaskDomainError> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, FORM_TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, FORM_TIMESTAMP_WITH_SECONDS_FORMAT))
        .map_err(|_| TaskDomainError::InvalidTimestamp {
            field,
            value: raw.to_owned(),
        })
}

/// Formats a timestamp for pre-filling a form input.
#[must_use]
pub fn format_form_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(FORM_TIMESTAMP_FORMAT).to_string()
}
