// libs/anchor-cell/src/models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response body of the pinning service's pin-JSON endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinJsonResponse {
    #[serde(rename = "IpfsHash", default)]
    pub ipfs_hash: String,
}

/// Off-chain storage failures. All of them abort a booking before any gas is
/// spent; none are retried here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    #[error("Pinning service credentials are not configured")]
    NotConfigured,

    #[error("Pinning service unavailable: {0}")]
    AnchorUnavailable(String),

    #[error("Pinning service returned no content reference")]
    AnchorEmptyResult,
}
