// libs/ledger-cell/src/gateway.rs
use async_trait::async_trait;
use mockall::automock;

use crate::models::{ChainError, TransactionReceipt, TransactionRequest};

/// The ledger contract plus the wallet that signs for it.
///
/// `submit` covers the whole round trip: the wallet signature prompt, the
/// send, and the wait for the transaction to be mined. It resolves only once
/// a confirmation receipt exists, or fails with the `ChainError` describing
/// which leg broke. Implementations live outside this workspace (browser
/// wallet bridges, node RPC adapters); the core only depends on this trait.
#[automock]
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    async fn submit(&self, request: TransactionRequest)
        -> Result<TransactionReceipt, ChainError>;
}
