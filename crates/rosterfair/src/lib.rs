//! rosterfair - Fair day-to-worker roster allocation
//!
//! Give every day one worker from those available that day, spread as
//! evenly as availability allows.
//!
//! # Example
//!
//! ```rust
//! use rosterfair::prelude::*;
//!
//! let days = vec![vec![0, 1], vec![0, 1], vec![0], vec![]];
//! let schedule = compute_schedule(2, &days).unwrap();
//!
//! assert_eq!(schedule.assignment(3), Assignment::Unassigned);
//! assert_eq!(schedule.workloads(), &[2, 1]);
//! assert_eq!(schedule.imbalance(), 1);
//! ```

pub use rosterfair_core::{
    audit, Assignment, AuditViolation, AvailabilitySet, DayIndex, Result, RosterError,
    RosterProblem, WorkerId,
};

pub use rosterfair_config::{ConfigError, EnvironmentMode, SolverConfig};

pub use rosterfair_solver::{
    compute_schedule, FairnessRepairPhase, GreedyConstructionPhase, Phase, PhaseStatistics,
    Schedule, Solver, SolverStatistics, WorkloadTracker,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        audit, compute_schedule, Assignment, AvailabilitySet, EnvironmentMode, RosterError,
        RosterProblem, Schedule, Solver, SolverConfig, WorkerId,
    };
}
