//! rosterfair Solver Engine
//!
//! This crate provides the allocation engine:
//! - [`WorkloadTracker`] for incremental per-worker day counts
//! - [`GreedyConstructionPhase`] for the initial feasible assignment
//! - [`FairnessRepairPhase`] for the local search that enforces fairness
//! - Solver and phase scopes
//! - Statistics on what each phase did
//! - [`compute_schedule`], the one-call entry point

pub mod phase;
pub mod schedule;
pub mod scope;
pub mod solver;
pub mod statistics;
pub mod workload;

pub use phase::{FairnessRepairPhase, GreedyConstructionPhase, Phase};
pub use schedule::Schedule;
pub use scope::{PhaseScope, SolverScope};
pub use solver::{compute_schedule, Solver};
pub use statistics::{PhaseStatistics, SolverStatistics};
pub use workload::WorkloadTracker;
