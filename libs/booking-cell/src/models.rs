// libs/booking-cell/src/models.rs
use serde::{Deserialize, Serialize};

/// Raw booking input as the caller collected it. Nothing here is trusted:
/// the orchestrator validates every field before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doctor_address: String,
    pub notes: String,
    /// Requested start time as entered: RFC 3339 or `YYYY-MM-DDTHH:MM[:SS]`.
    pub requested_time: Option<String>,
}
