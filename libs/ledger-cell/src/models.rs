// libs/ledger-cell/src/models.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use shared_models::{Address, AppointmentId, ContentReference};

// ==============================================================================
// TRANSACTION REQUEST MODEL
// ==============================================================================

/// One of the three state-changing calls the appointment contract exposes.
///
/// `Book` can only be built from an owned `ContentReference`, so a booking
/// transaction structurally cannot reference content that was never pinned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum ContractOperation {
    Book {
        doctor: Address,
        starts_at: i64,
        content_ref: ContentReference,
    },
    Cancel {
        appointment_id: AppointmentId,
    },
    Reschedule {
        appointment_id: AppointmentId,
        new_starts_at: i64,
    },
}

impl ContractOperation {
    pub fn name(&self) -> &'static str {
        match self {
            ContractOperation::Book { .. } => "bookAppointment",
            ContractOperation::Cancel { .. } => "cancelAppointment",
            ContractOperation::Reschedule { .. } => "rescheduleAppointment",
        }
    }
}

/// A contract call plus the fixed gas ceiling attached by the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub operation: ContractOperation,
    pub gas_limit: u64,
}

// ==============================================================================
// TRANSACTION RECEIPT MODEL
// ==============================================================================

/// Event payload of a confirmed receipt.
///
/// Providers return either a pre-decoded event list or undecoded raw log
/// entries, never both. The variant tells the extractor which decoding path
/// applies; a receipt with no payload at all carries `None` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReceiptEvents {
    Decoded(Vec<DecodedEvent>),
    Raw(Vec<RawLog>),
}

/// An event already decoded by the provider, with named arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedEvent {
    pub name: String,
    pub args: Map<String, Value>,
}

impl DecodedEvent {
    pub fn new(name: impl Into<String>, args: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }
}

/// An undecoded log entry as emitted by the ledger: topic hashes plus the
/// ABI-encoded data words, all 0x-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLog {
    pub address: String,
    pub topics: Vec<String>,
    pub data: String,
}

/// Confirmation record for a mined transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    pub block_number: u64,
    pub events: Option<ReceiptEvents>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

/// Wallet, network, and contract failures raised while submitting a
/// transaction or waiting for its confirmation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Signature request rejected by user")]
    RejectedByUser,

    #[error("Transaction reverted by contract: {0}")]
    Reverted(String),

    #[error("Ledger network unavailable: {0}")]
    NetworkUnavailable(String),
}
