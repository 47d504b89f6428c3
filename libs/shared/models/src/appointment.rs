// libs/shared/models/src/appointment.rs
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

// ==============================================================================
// CORE DOMAIN TYPES
// ==============================================================================

/// A 20-byte hex account identifier (`0x` + 40 hex chars).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Checks the syntax and returns the address unchanged on success.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let address_regex = Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap();
        if address_regex.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::MalformedAddress)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ledger-assigned appointment identifier, surfaced stringified.
///
/// The ledger owns this value; the client only ever reads it out of a
/// confirmed receipt or passes it back for cancel/reschedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for AppointmentId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appointment metadata pinned off-chain before booking.
///
/// Built transiently per booking attempt, serialized once by the anchor
/// client, and discarded. Never persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub patient: Address,
    pub doctor: Address,
    pub notes: String,
    /// Unix seconds, already validated as strictly in the future.
    pub starts_at: i64,
}

/// Opaque handle to pinned content, returned by the storage network.
///
/// Non-empty by construction; immutable once obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentReference(String);

impl ContentReference {
    /// Returns `None` for an empty or whitespace-only value.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_reference_rejects_empty_values() {
        assert!(ContentReference::new("").is_none());
        assert!(ContentReference::new("   ").is_none());
    }

    #[test]
    fn content_reference_keeps_value_intact() {
        let reference = ContentReference::new("Qm123").unwrap();
        assert_eq!(reference.as_str(), "Qm123");
    }

    #[test]
    fn appointment_id_stringifies_integers() {
        let id = AppointmentId::from(42u64);
        assert_eq!(id.to_string(), "42");
    }
}
