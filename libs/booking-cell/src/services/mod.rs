pub mod extractor;
pub mod orchestrator;
pub mod submitter;
pub mod validation;

pub use extractor::extract_appointment_id;
pub use orchestrator::BookingOrchestrator;
pub use submitter::TransactionSubmitter;
