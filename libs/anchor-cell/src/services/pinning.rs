// libs/anchor-cell/src/services/pinning.rs
use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;
use shared_models::{AppointmentDraft, ContentReference};

use crate::models::{AnchorError, PinJsonResponse};

/// Client for the content-addressed storage pinning API.
///
/// Serializes an appointment draft to canonical JSON and pins it, returning
/// the content reference the on-chain record will point at. Credentials come
/// from runtime configuration and are sent with every request.
#[derive(Debug)]
pub struct PinningClient {
    client: Client,
    base_url: String,
    api_key: String,
    secret_api_key: String,
}

impl PinningClient {
    pub fn new(config: &AppConfig) -> Result<Self, AnchorError> {
        if !config.is_pinning_configured() {
            return Err(AnchorError::NotConfigured);
        }

        Ok(Self {
            client: Client::new(),
            base_url: config.pinning_base_url.clone(),
            api_key: config.pinning_api_key.clone(),
            secret_api_key: config.pinning_secret_api_key.clone(),
        })
    }

    /// Pins the draft and returns its content reference.
    ///
    /// POST /pinning/pinJSONToIPFS
    pub async fn anchor(
        &self,
        draft: &AppointmentDraft,
    ) -> Result<ContentReference, AnchorError> {
        let url = format!("{}/pinning/pinJSONToIPFS", self.base_url);
        debug!("Pinning appointment draft to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_api_key)
            .json(draft)
            .send()
            .await
            .map_err(|e| AnchorError::AnchorUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Pinning service error ({}): {}", status, error_text);
            return Err(AnchorError::AnchorUnavailable(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let pin_response: PinJsonResponse = response
            .json()
            .await
            .map_err(|e| AnchorError::AnchorUnavailable(e.to_string()))?;

        let reference =
            ContentReference::new(pin_response.ipfs_hash).ok_or(AnchorError::AnchorEmptyResult)?;

        info!("Appointment draft pinned as {}", reference);
        Ok(reference)
    }
}
