use thiserror::Error;

/// User-input failures. Always locally recoverable: the caller re-prompts
/// and retries without any partial work having happened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Appointment time is missing, unparsable, or not in the future")]
    PastOrInvalidTime,

    #[error("Address is not a well-formed 20-byte hex account identifier")]
    MalformedAddress,

    #[error("Appointment ID is required")]
    MissingIdentifier,
}
