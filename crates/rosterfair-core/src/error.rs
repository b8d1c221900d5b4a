//! Error types for rosterfair

use thiserror::Error;

use crate::audit::AuditViolation;
use crate::worker::DayIndex;

/// Main error type for rosterfair operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The worker count was negative
    #[error("Invalid argument: worker count must be non-negative, got {worker_count}")]
    NegativeWorkerCount { worker_count: i64 },

    /// A day lists a worker outside `0..worker_count`
    #[error(
        "Invalid argument: day {day} lists worker {worker}, valid workers are 0..{worker_count}"
    )]
    WorkerOutOfRange {
        day: DayIndex,
        worker: i64,
        worker_count: usize,
    },

    /// A caller-supplied assignment cannot seed the repair phase
    #[error("Infeasible assignment: {0}")]
    InfeasibleAssignment(#[from] AuditViolation),
}

impl RosterError {
    /// Returns true for the malformed-input conditions.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeWorkerCount { .. } | Self::WorkerOutOfRange { .. }
        )
    }
}

/// Result type alias for rosterfair operations
pub type Result<T> = std::result::Result<T, RosterError>;
