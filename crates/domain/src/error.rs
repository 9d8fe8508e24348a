//! Domain error taxonomy — the closed set of failure reasons the core
//! reports, independent of any storage engine or transport.

/// A classified failure reason returned by validators and repositories.
///
/// Validators and the storage error classifier are the only places these
/// originate; every other component forwards them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// A required value was absent.
    #[error("required fields may not be absent")]
    NotNullViolation,

    /// A uniqueness constraint was violated.
    #[error("value is not unique")]
    DuplicateData,

    /// Content rejected by a domain rule — a blank required field, an
    /// unsupported device kind, or a reference to a missing room.
    #[error("illegal value: {0}")]
    IllegalData(String),

    /// Anything the classifier does not recognize: connectivity loss,
    /// malformed queries, timeouts. Callers must treat this as an
    /// infrastructure failure and never expose its detail.
    #[error("storage failure")]
    Unclassified(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DomainError {
    /// Wrap an unrecognized failure without classifying it.
    pub fn unclassified(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unclassified(Box::new(err))
    }
}
