// libs/ledger-cell/src/session.rs
use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use shared_models::Address;

use crate::models::ChainError;

/// The external wallet: sole source of identity and change notifications.
#[automock]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Address string of the currently connected account, as reported by the
    /// wallet. Syntax is checked by `WalletSession::establish`, not here.
    async fn connected_address(&self) -> Result<String, ChainError>;
}

/// Change notifications emitted by the wallet provider. Either one
/// invalidates the current session as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    AccountsChanged,
    ChainChanged,
}

/// Connected account plus the contract it transacts against.
///
/// Built once per wallet connection and handed to a fresh orchestrator. On
/// any `WalletEvent` the caller discards the session and establishes a new
/// one; sessions are never mutated in place.
#[derive(Debug, Clone)]
pub struct WalletSession {
    pub account: Address,
    pub contract_address: Address,
}

impl WalletSession {
    pub async fn establish(
        provider: &dyn WalletProvider,
        contract_address: Address,
    ) -> Result<Self, ChainError> {
        let reported = provider.connected_address().await?;
        let account = Address::parse(&reported).map_err(|_| {
            ChainError::NetworkUnavailable(format!(
                "Wallet reported malformed account address: {}",
                reported
            ))
        })?;

        info!("Wallet session established for account {}", account);
        Ok(Self {
            account,
            contract_address,
        })
    }
}
