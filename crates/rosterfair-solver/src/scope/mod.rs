//! Scope hierarchy for solver execution.
//!
//! Scopes maintain state at different levels of the solving process:
//! - [`SolverScope`]: Top-level, owns the working assignment and workloads
//! - [`PhaseScope`]: Per-phase step counting and timing

mod phase;
mod solver;

pub use phase::PhaseScope;
pub use solver::SolverScope;

#[cfg(test)]
mod tests;
