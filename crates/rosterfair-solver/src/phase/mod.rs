//! Solver phases
//!
//! Phases are the main building blocks of solving:
//! - [`GreedyConstructionPhase`]: Builds a feasible initial assignment
//! - [`FairnessRepairPhase`]: Moves days to less loaded workers until no
//!   improving swap remains

pub mod construction;
pub mod repair;

use std::fmt::Debug;

use crate::scope::SolverScope;

pub use construction::GreedyConstructionPhase;
pub use repair::FairnessRepairPhase;

/// A phase of the solving process.
///
/// Phases are executed in sequence by the solver. Each phase works on the
/// assignment and workloads held by the solver scope.
pub trait Phase: Send + Debug {
    /// Executes this phase.
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>);

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}
