// libs/booking-cell/src/services/submitter.rs
use tracing::{debug, info};

use ledger_cell::{ChainError, ContractOperation, LedgerGateway, TransactionReceipt, TransactionRequest};

/// Fixed gas ceilings, one per contract operation. These are part of the
/// contract with the ledger's gas metering, not estimates; environments
/// without gas estimation rely on exactly these values.
pub const BOOK_GAS_LIMIT: u64 = 500_000;
pub const CANCEL_GAS_LIMIT: u64 = 100_000;
pub const RESCHEDULE_GAS_LIMIT: u64 = 100_000;

/// Dispatches a contract operation with its fixed gas ceiling and waits for
/// the confirmation receipt.
pub struct TransactionSubmitter<G> {
    gateway: G,
}

impl<G: LedgerGateway> TransactionSubmitter<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn submit(
        &self,
        operation: ContractOperation,
    ) -> Result<TransactionReceipt, ChainError> {
        let gas_limit = gas_limit_for(&operation);
        debug!(
            "Submitting {} with gas limit {}",
            operation.name(),
            gas_limit
        );

        let receipt = self
            .gateway
            .submit(TransactionRequest {
                operation,
                gas_limit,
            })
            .await?;

        info!(
            "Transaction {} confirmed in block {}",
            receipt.transaction_hash, receipt.block_number
        );
        Ok(receipt)
    }
}

fn gas_limit_for(operation: &ContractOperation) -> u64 {
    match operation {
        ContractOperation::Book { .. } => BOOK_GAS_LIMIT,
        ContractOperation::Cancel { .. } => CANCEL_GAS_LIMIT,
        ContractOperation::Reschedule { .. } => RESCHEDULE_GAS_LIMIT,
    }
}
