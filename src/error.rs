//! Error types.
//!
//! Three layers, matching the crate's construction order:
//!
//! - [`GraphError`]: program graph construction and identifier lookup.
//!   Unrecoverable for that record store — a dangling reference means the
//!   input is malformed, and no partially valid graph is ever produced.
//! - [`AssignmentError`]: assignment construction. Caller error, rejected
//!   before any state exists.
//! - [`ScheduleError`]: schedule mutation. Expected and recoverable — the
//!   consumer retries with a different placement. A failed mutation
//!   leaves the schedule untouched.

use thiserror::Error;

use crate::graph::{EntityKind, PeriodId, SectionId};
use crate::validation::ValidationError;

/// Program graph construction or lookup failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An identifier does not resolve to any entity of the expected kind.
    #[error("unknown {kind} identifier {id}")]
    UnknownIdentifier {
        /// Lookup table the identifier was resolved against.
        kind: EntityKind,
        /// The unresolvable raw identifier.
        id: u32,
    },

    /// The record store failed integrity validation.
    ///
    /// Carries every detected defect, not just the first.
    #[error("invalid record store: {} validation error(s)", .0.len())]
    InvalidRecords(Vec<ValidationError>),
}

/// Assignment construction failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentError {
    /// An identifier in the request did not resolve.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The start period's time block runs out before the section's full
    /// period length fits.
    #[error(
        "section {section} needs {needed} period(s) from {start}, \
         but its block has only {available} remaining"
    )]
    InsufficientPeriods {
        section: SectionId,
        start: PeriodId,
        needed: u32,
        available: u32,
    },

    /// A present-assignment index outside `[0, period_length)`.
    #[error("present assignment index {index} out of bounds for period length {period_length}")]
    IndexOutOfBounds { index: usize, period_length: usize },
}

/// Schedule mutation failure. The schedule is unchanged on error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// An identifier in the assignment did not resolve against this
    /// schedule's program.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Capacity or availability mismatch between the assignment and the
    /// program graph.
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// A room or teacher is already occupied during an assigned period.
    #[error("double booked: {message}")]
    DoubleBooked { message: String },

    /// Removal of an assignment that is not in the schedule.
    #[error("section {section} is not placed in this schedule")]
    NotPlaced { section: SectionId },

    /// Removal of a locked assignment without the override.
    #[error("section {section} is locked in place")]
    Locked { section: SectionId },
}

impl ScheduleError {
    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub(crate) fn double_booked(message: impl Into<String>) -> Self {
        Self::DoubleBooked {
            message: message.into(),
        }
    }
}
