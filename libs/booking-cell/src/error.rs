use thiserror::Error;

use anchor_cell::AnchorError;
use ledger_cell::ChainError;
use shared_models::ValidationError;

/// Failures recovering the appointment ID from a confirmed receipt.
///
/// Distinct from `ChainError`: by the time extraction runs the transaction
/// has already been mined, so on-chain state did change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Booking confirmed, but the receipt carried no AppointmentBooked event")]
    EventNotFound,

    #[error("Booking confirmed, but the first receipt log was not AppointmentBooked: {0}")]
    UnexpectedLogEvent(String),

    #[error("Booking confirmed, but the receipt carried no event logs")]
    NoLogsFound,
}

/// Single user-facing outcome for a failed operation. Each variant keeps its
/// stage's typed error; the `Display` message is what the caller shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Anchor(#[from] AnchorError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
