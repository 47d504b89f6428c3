// libs/booking-cell/src/services/orchestrator.rs
use tracing::{info, warn};

use anchor_cell::PinningClient;
use ledger_cell::{ContractOperation, LedgerGateway, WalletSession};
use shared_models::{AppointmentDraft, AppointmentId};

use crate::error::BookingError;
use crate::models::BookingRequest;
use crate::services::extractor::extract_appointment_id;
use crate::services::submitter::TransactionSubmitter;
use crate::services::validation;

/// Composes validation, content anchoring, transaction submission, and
/// result extraction into the three public appointment operations.
///
/// One orchestrator belongs to one wallet session. When the wallet reports
/// an account or chain change, the caller establishes a new session and
/// builds a fresh orchestrator instead of mutating this one.
///
/// Failure at any stage short-circuits the remaining stages and surfaces as
/// a single `BookingError`. Nothing is retried, and operations are not
/// idempotent once a transaction has been submitted: resubmitting after a
/// network failure may create a duplicate on-chain effect.
pub struct BookingOrchestrator<G> {
    session: WalletSession,
    anchor: PinningClient,
    submitter: TransactionSubmitter<G>,
}

impl<G: LedgerGateway> BookingOrchestrator<G> {
    pub fn new(session: WalletSession, anchor: PinningClient, gateway: G) -> Self {
        Self {
            session,
            anchor,
            submitter: TransactionSubmitter::new(gateway),
        }
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    /// Books an appointment: validate, pin the draft off-chain, submit the
    /// booking transaction, and read the assigned ID out of the receipt.
    ///
    /// The draft is pinned before the transaction is built, so the on-chain
    /// record can only ever reference content the pinning service accepted.
    pub async fn book_appointment(
        &self,
        request: BookingRequest,
    ) -> Result<AppointmentId, BookingError> {
        info!("Booking appointment for account {}", self.session.account);

        let starts_at = validation::validate_booking_time(request.requested_time.as_deref())?;
        let doctor = validation::validate_address(&request.doctor_address)?;

        let draft = AppointmentDraft {
            patient: self.session.account.clone(),
            doctor: doctor.clone(),
            notes: request.notes,
            starts_at,
        };
        let content_ref = self.anchor.anchor(&draft).await?;

        let receipt = self
            .submitter
            .submit(ContractOperation::Book {
                doctor,
                starts_at,
                content_ref,
            })
            .await?;

        let appointment_id = extract_appointment_id(&receipt).map_err(|e| {
            warn!("Booking confirmed but id extraction failed: {}", e);
            e
        })?;

        info!("Appointment booked with id {}", appointment_id);
        Ok(appointment_id)
    }

    /// Cancels an existing appointment by its ledger-assigned ID.
    pub async fn cancel_appointment(&self, appointment_id: &str) -> Result<(), BookingError> {
        let appointment_id = validation::validate_appointment_id(appointment_id)?;
        info!("Cancelling appointment {}", appointment_id);

        self.submitter
            .submit(ContractOperation::Cancel { appointment_id })
            .await?;
        Ok(())
    }

    /// Moves an existing appointment to a new, validated future time.
    pub async fn reschedule_appointment(
        &self,
        appointment_id: &str,
        new_time: Option<&str>,
    ) -> Result<(), BookingError> {
        let appointment_id = validation::validate_appointment_id(appointment_id)?;
        let new_starts_at = validation::validate_booking_time(new_time)?;
        info!(
            "Rescheduling appointment {} to {}",
            appointment_id, new_starts_at
        );

        self.submitter
            .submit(ContractOperation::Reschedule {
                appointment_id,
                new_starts_at,
            })
            .await?;
        Ok(())
    }
}
