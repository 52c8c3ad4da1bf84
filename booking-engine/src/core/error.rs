//! Engine error taxonomy

use crate::db::repository::RepoError;
use thiserror::Error;

/// Errors raised by the availability engine
///
/// Validation errors (`Closed`, `TooSoon`, `TooFar`) are raised before
/// any feasibility computation and short-circuit it. "No room" is not
/// an error: it surfaces as an `Alternatives` outcome.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Requested date is closed or the time-of-day falls outside
    /// the opening window
    #[error("restaurant is closed at the requested time")]
    Closed,

    /// Requested time is less than the minimum lead from now
    #[error("booking must be at least {minutes} minutes in advance")]
    TooSoon { minutes: i64 },

    /// Requested time is beyond the advance booking horizon
    #[error("booking must be no more than {months} month(s) in advance")]
    TooFar { months: u32 },

    /// The table catalog is empty - distinct from "restaurant full"
    #[error("no tables configured")]
    NoTablesConfigured,

    /// Transient repository failure, propagated not retried
    #[error("repository error: {0}")]
    Repository(#[from] RepoError),
}

/// Result type for engine operations
pub type BookingResult<T> = Result<T, BookingError>;
