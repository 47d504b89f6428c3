// libs/booking-cell/src/services/extractor.rs
use serde_json::Value;
use tracing::{debug, warn};

use ledger_cell::events::{decode_raw_log, APPOINTMENT_BOOKED, APPOINTMENT_ID_ARG};
use ledger_cell::{DecodedEvent, ReceiptEvents, TransactionReceipt};
use shared_models::AppointmentId;

use crate::error::ExtractionError;

/// Recovers the ledger-assigned appointment ID from a confirmed booking
/// receipt.
///
/// Two decoding paths, tried in a fixed order:
/// 1. a pre-decoded event list, scanned for `AppointmentBooked`;
/// 2. otherwise the FIRST raw log entry, decoded against the contract's
///    event interface and accepted only if it is `AppointmentBooked`.
///
/// Every failure here is a reporting failure, not a transaction failure:
/// the booking already confirmed.
pub fn extract_appointment_id(
    receipt: &TransactionReceipt,
) -> Result<AppointmentId, ExtractionError> {
    match &receipt.events {
        Some(ReceiptEvents::Decoded(events)) => {
            let event = events
                .iter()
                .find(|event| event.name == APPOINTMENT_BOOKED)
                .ok_or(ExtractionError::EventNotFound)?;

            let id = appointment_id_arg(event).ok_or(ExtractionError::EventNotFound)?;
            debug!("Extracted appointment id {} from decoded events", id);
            Ok(id)
        }
        Some(ReceiptEvents::Raw(logs)) => {
            let log = logs.first().ok_or(ExtractionError::NoLogsFound)?;

            let event = decode_raw_log(log).ok_or_else(|| {
                warn!("First receipt log did not decode against the contract interface");
                ExtractionError::UnexpectedLogEvent(
                    log.topics.first().cloned().unwrap_or_default(),
                )
            })?;

            if event.name != APPOINTMENT_BOOKED {
                return Err(ExtractionError::UnexpectedLogEvent(event.name));
            }

            let id = appointment_id_arg(&event).ok_or(ExtractionError::EventNotFound)?;
            debug!("Extracted appointment id {} via raw log fallback", id);
            Ok(id)
        }
        None => Err(ExtractionError::NoLogsFound),
    }
}

fn appointment_id_arg(event: &DecodedEvent) -> Option<AppointmentId> {
    match event.arg(APPOINTMENT_ID_ARG)? {
        Value::Number(number) => Some(AppointmentId::new(number.to_string())),
        Value::String(value) if !value.is_empty() => Some(AppointmentId::new(value.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use ledger_cell::events::{appointment_booked_topic, encode_uint256_word, event_topic};
    use ledger_cell::RawLog;
    use serde_json::{json, Map};

    fn receipt(events: Option<ReceiptEvents>) -> TransactionReceipt {
        TransactionReceipt {
            transaction_hash: "0xabc".to_string(),
            block_number: 18,
            events,
        }
    }

    fn booked_event(id: u64) -> DecodedEvent {
        let mut args = Map::new();
        args.insert(APPOINTMENT_ID_ARG.to_string(), json!(id));
        DecodedEvent::new(APPOINTMENT_BOOKED, args)
    }

    #[test]
    fn structured_path_returns_stringified_id() {
        let receipt = receipt(Some(ReceiptEvents::Decoded(vec![booked_event(42)])));
        let id = extract_appointment_id(&receipt).unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn structured_path_skips_unrelated_events() {
        let other = DecodedEvent::new("FeeCharged", Map::new());
        let receipt = receipt(Some(ReceiptEvents::Decoded(vec![other, booked_event(42)])));
        assert_eq!(extract_appointment_id(&receipt).unwrap().as_str(), "42");
    }

    #[test]
    fn structured_path_without_event_is_event_not_found() {
        let other = DecodedEvent::new("FeeCharged", Map::new());
        let receipt = receipt(Some(ReceiptEvents::Decoded(vec![other])));
        assert_matches!(
            extract_appointment_id(&receipt),
            Err(ExtractionError::EventNotFound)
        );
    }

    #[test]
    fn structured_path_without_id_arg_is_event_not_found() {
        let event = DecodedEvent::new(APPOINTMENT_BOOKED, Map::new());
        let receipt = receipt(Some(ReceiptEvents::Decoded(vec![event])));
        assert_matches!(
            extract_appointment_id(&receipt),
            Err(ExtractionError::EventNotFound)
        );
    }

    #[test]
    fn fallback_path_decodes_same_id_as_structured() {
        let log = RawLog {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            topics: vec![appointment_booked_topic()],
            data: encode_uint256_word(42),
        };
        let receipt = receipt(Some(ReceiptEvents::Raw(vec![log])));
        assert_eq!(extract_appointment_id(&receipt).unwrap().as_str(), "42");
    }

    #[test]
    fn fallback_path_rejects_other_contract_events() {
        let log = RawLog {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            topics: vec![event_topic("AppointmentCancelled(uint256)")],
            data: encode_uint256_word(42),
        };
        let receipt = receipt(Some(ReceiptEvents::Raw(vec![log])));
        assert_matches!(
            extract_appointment_id(&receipt),
            Err(ExtractionError::UnexpectedLogEvent(name)) => {
                assert_eq!(name, "AppointmentCancelled");
            }
        );
    }

    #[test]
    fn fallback_path_rejects_undecodable_log() {
        let log = RawLog {
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_string(),
            topics: vec![event_topic("Transfer(address,address,uint256)")],
            data: encode_uint256_word(1),
        };
        let receipt = receipt(Some(ReceiptEvents::Raw(vec![log])));
        assert_matches!(
            extract_appointment_id(&receipt),
            Err(ExtractionError::UnexpectedLogEvent(_))
        );
    }

    #[test]
    fn empty_raw_logs_is_no_logs_found() {
        let receipt = receipt(Some(ReceiptEvents::Raw(vec![])));
        assert_matches!(
            extract_appointment_id(&receipt),
            Err(ExtractionError::NoLogsFound)
        );
    }

    #[test]
    fn receipt_without_any_logs_is_no_logs_found() {
        let receipt = receipt(None);
        assert_matches!(
            extract_appointment_id(&receipt),
            Err(ExtractionError::NoLogsFound)
        );
    }
}
