//! Conversion between `MM:SS` / `HH:MM:SS` strings and whole seconds.
//!
//! [`parse`] never fails: anything it cannot read becomes `0` so a catalog with
//! a typo still renders. Callers that need to know about the typo use
//! [`try_parse`] instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("empty time string")]
    Empty,
    #[error("expected MM:SS or HH:MM:SS, found {0} field(s)")]
    FieldCount(usize),
    #[error("field {0:?} is not a number")]
    NotNumeric(String),
    #[error("field value {0} must be below 60")]
    OutOfRange(u32),
    #[error("time value does not fit in 32 bits")]
    Overflow,
}

pub fn parse(raw: &str) -> u32 {
    try_parse(raw).unwrap_or(0)
}

pub fn try_parse(raw: &str) -> Result<u32, TimeParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let mut values = Vec::with_capacity(3);
    for field in trimmed.split(':').map(str::trim) {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeParseError::NotNumeric(field.to_string()));
        }
        let value = field
            .parse::<u32>()
            .map_err(|_| TimeParseError::Overflow)?;
        values.push(value);
    }

    match values.as_slice() {
        &[minutes, seconds] => {
            check_sexagesimal(seconds)?;
            combine(0, minutes, seconds)
        }
        &[hours, minutes, seconds] => {
            check_sexagesimal(minutes)?;
            check_sexagesimal(seconds)?;
            combine(hours, minutes, seconds)
        }
        other => Err(TimeParseError::FieldCount(other.len())),
    }
}

fn check_sexagesimal(value: u32) -> Result<(), TimeParseError> {
    if value >= 60 {
        return Err(TimeParseError::OutOfRange(value));
    }
    Ok(())
}

fn combine(hours: u32, minutes: u32, seconds: u32) -> Result<u32, TimeParseError> {
    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or(TimeParseError::Overflow)
}

/// Zero-padded `HH:MM:SS`.
pub fn format_hms(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// Compact clock label for ruler ticks: `M:SS`, or `H:MM:SS` past the hour.
pub fn format_clock(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
