//! Error type for hall selection, allocation, and record loading.

use thiserror::Error;

use crate::models::SessionKey;
use crate::validation::ValidationError;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, InvigilationError>;

/// Errors reported by the selector, the allocator, and the record loader.
#[derive(Error, Debug)]
pub enum InvigilationError {
    /// Selected halls seat fewer candidates than required.
    #[error("session {session}: selected capacity {selected} is below required strength {required}")]
    CapacityInsufficient {
        session: SessionKey,
        selected: u64,
        required: u32,
    },
    /// Allocation was asked to run with an empty roster.
    #[error("no eligible staff to allocate duties to")]
    NoEligibleStaff,
    /// The duty ceiling leaves a session without anyone to invigilate.
    #[error("not enough staff to cover session {session} with at most {ceiling} duties for each of {staff} staff")]
    InsufficientStaff {
        session: SessionKey,
        ceiling: u32,
        staff: usize,
    },
    /// The selector has already walked past the last session.
    #[error("hall selection is already complete")]
    SelectionFinished,
    /// The selector was finished while sessions remained.
    #[error("hall selection incomplete: {remaining} session(s) still to confirm")]
    SelectionIncomplete { remaining: usize },
    /// A hall name not present in the loaded hall list.
    #[error("unknown hall: {0}")]
    UnknownHall(String),
    /// A confirmed session that is not part of the catalog.
    #[error("session {0} is not in the catalog")]
    UnknownSession(SessionKey),
    /// A malformed store record.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    /// Input failed structural validation.
    #[error("input validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
