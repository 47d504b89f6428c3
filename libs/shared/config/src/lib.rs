use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pinning_base_url: String,
    pub pinning_api_key: String,
    pub pinning_secret_api_key: String,
    pub contract_address: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            pinning_base_url: env::var("PINNING_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("PINNING_BASE_URL not set, using default");
                    "https://api.pinata.cloud".to_string()
                }),
            pinning_api_key: env::var("PINNING_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("PINNING_API_KEY not set, using empty value");
                    String::new()
                }),
            pinning_secret_api_key: env::var("PINNING_SECRET_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("PINNING_SECRET_API_KEY not set, using empty value");
                    String::new()
                }),
            contract_address: env::var("APPOINTMENT_CONTRACT_ADDRESS")
                .unwrap_or_else(|_| {
                    warn!("APPOINTMENT_CONTRACT_ADDRESS not set, using empty value");
                    String::new()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        self.is_pinning_configured() && !self.contract_address.is_empty()
    }

    pub fn is_pinning_configured(&self) -> bool {
        !self.pinning_base_url.is_empty()
            && !self.pinning_api_key.is_empty()
            && !self.pinning_secret_api_key.is_empty()
    }
}
