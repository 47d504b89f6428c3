// libs/booking-cell/src/services/validation.rs
use chrono::{DateTime, NaiveDateTime, Utc};

use shared_models::{Address, AppointmentId, ValidationError};

/// Parses a candidate appointment time and checks it lies strictly in the
/// future. Runs before any network call, so an invalid time costs neither an
/// off-chain write nor gas.
///
/// Accepted forms: RFC 3339, or `YYYY-MM-DDTHH:MM[:SS]` interpreted as UTC.
pub fn validate_booking_time(candidate: Option<&str>) -> Result<i64, ValidationError> {
    let raw = candidate
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::PastOrInvalidTime)?;

    let timestamp = parse_timestamp(raw).ok_or(ValidationError::PastOrInvalidTime)?;

    if timestamp <= Utc::now().timestamp() {
        return Err(ValidationError::PastOrInvalidTime);
    }

    Ok(timestamp)
}

/// Checks that `value` is a well-formed 20-byte hex account identifier and
/// returns it unchanged.
pub fn validate_address(value: &str) -> Result<Address, ValidationError> {
    Address::parse(value.trim())
}

/// Requires a non-blank appointment identifier.
pub fn validate_appointment_id(value: &str) -> Result<AppointmentId, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingIdentifier);
    }
    Ok(AppointmentId::new(trimmed))
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.timestamp());
    }

    // datetime-local style input, without zone information
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp());
        }
    }

    None
}
