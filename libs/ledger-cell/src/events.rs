// libs/ledger-cell/src/events.rs
use serde_json::{json, Map};
use sha3::{Digest, Keccak256};
use tracing::debug;

use crate::models::{DecodedEvent, RawLog};

/// Event name the booking flow extracts its appointment ID from.
pub const APPOINTMENT_BOOKED: &str = "AppointmentBooked";

/// Name of the uint256 argument every appointment event carries.
pub const APPOINTMENT_ID_ARG: &str = "appointmentId";

/// The appointment contract's event interface. Each event carries a single
/// non-indexed uint256 `appointmentId` in the data section, so one descriptor
/// per event name is enough to decode any log the contract emits.
const EVENT_SIGNATURES: &[(&str, &str)] = &[
    (APPOINTMENT_BOOKED, "AppointmentBooked(uint256)"),
    ("AppointmentCancelled", "AppointmentCancelled(uint256)"),
    ("AppointmentRescheduled", "AppointmentRescheduled(uint256)"),
];

/// Keccak-256 topic hash for an event signature, 0x-prefixed.
pub fn event_topic(signature: &str) -> String {
    let digest = Keccak256::digest(signature.as_bytes());
    format!("0x{}", hex::encode(digest))
}

/// Topic hash of `AppointmentBooked(uint256)`.
pub fn appointment_booked_topic() -> String {
    event_topic("AppointmentBooked(uint256)")
}

/// Decodes a raw log entry against the contract's known event interface.
///
/// Matches `topics[0]` against the interface's signature hashes and reads the
/// uint256 argument from the first 32-byte data word. Returns `None` when the
/// topic belongs to no known event or the data section is malformed.
pub fn decode_raw_log(log: &RawLog) -> Option<DecodedEvent> {
    let topic = log.topics.first()?;

    let (name, _) = EVENT_SIGNATURES
        .iter()
        .find(|(_, signature)| event_topic(signature).eq_ignore_ascii_case(topic))?;

    let appointment_id = decode_uint256_word(&log.data)?;
    debug!("Decoded raw log as {} with id {}", name, appointment_id);

    let mut args = Map::new();
    args.insert(APPOINTMENT_ID_ARG.to_string(), json!(appointment_id));
    Some(DecodedEvent::new(*name, args))
}

/// Encodes a uint256 value as a single 32-byte data word, 0x-prefixed.
/// Counterpart of `decode_uint256_word`, used by gateway implementations
/// and tests to build raw logs.
pub fn encode_uint256_word(value: u64) -> String {
    format!("0x{:064x}", value)
}

// Reads the first 32-byte word of the data section as a big-endian integer.
// Ledger-assigned identifiers fit in u64; larger values are treated as
// malformed rather than silently truncated.
fn decode_uint256_word(data: &str) -> Option<u64> {
    let hex_data = data.strip_prefix("0x").unwrap_or(data);
    let first_word = hex_data.get(..64)?;

    let word = hex::decode(first_word).ok()?;
    let (high, low) = word.split_at(24);
    if high.iter().any(|byte| *byte != 0) {
        return None;
    }

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(low);
    Some(u64::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booked_log(data: String) -> RawLog {
        RawLog {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            topics: vec![appointment_booked_topic()],
            data,
        }
    }

    #[test]
    fn event_topic_is_stable_and_prefixed() {
        let topic = appointment_booked_topic();
        assert!(topic.starts_with("0x"));
        assert_eq!(topic.len(), 66);
        assert_eq!(topic, event_topic("AppointmentBooked(uint256)"));
    }

    #[test]
    fn decodes_booked_log_round_trip() {
        let log = booked_log(encode_uint256_word(42));
        let event = decode_raw_log(&log).unwrap();

        assert_eq!(event.name, APPOINTMENT_BOOKED);
        assert_eq!(event.arg(APPOINTMENT_ID_ARG), Some(&serde_json::json!(42)));
    }

    #[test]
    fn decodes_other_interface_events() {
        let log = RawLog {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            topics: vec![event_topic("AppointmentCancelled(uint256)")],
            data: encode_uint256_word(7),
        };

        let event = decode_raw_log(&log).unwrap();
        assert_eq!(event.name, "AppointmentCancelled");
    }

    #[test]
    fn rejects_unknown_topic() {
        let log = RawLog {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            topics: vec![event_topic("Transfer(address,address,uint256)")],
            data: encode_uint256_word(1),
        };

        assert!(decode_raw_log(&log).is_none());
    }

    #[test]
    fn rejects_truncated_data() {
        let log = booked_log("0x2a".to_string());
        assert!(decode_raw_log(&log).is_none());
    }

    #[test]
    fn rejects_oversized_identifier() {
        let log = booked_log(format!("0x{}", "ff".repeat(32)));
        assert!(decode_raw_log(&log).is_none());
    }

    #[test]
    fn rejects_log_without_topics() {
        let log = RawLog {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            topics: vec![],
            data: encode_uint256_word(1),
        };

        assert!(decode_raw_log(&log).is_none());
    }
}
