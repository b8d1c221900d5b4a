//! Phase-level scope.

use std::time::{Duration, Instant};

use super::SolverScope;
use crate::statistics::PhaseStatistics;

/// Scope for a single phase of solving.
///
/// # Type Parameters
/// * `'a` - Lifetime of the solver scope reference
/// * `'p` - Lifetime of the problem borrowed by the solver scope
pub struct PhaseScope<'a, 'p> {
    /// Reference to the parent solver scope.
    solver_scope: &'a mut SolverScope<'p>,
    /// Index of this phase (0-based).
    phase_index: usize,
    /// Workload potential at the start of this phase.
    starting_potential: u64,
    /// Number of steps in this phase.
    step_count: u64,
    /// When this phase started.
    start_time: Instant,
}

impl<'a, 'p> PhaseScope<'a, 'p> {
    /// Creates a new phase scope, numbered after the phases already run.
    pub fn new(solver_scope: &'a mut SolverScope<'p>) -> Self {
        let phase_index = solver_scope.phase_count();
        let starting_potential = solver_scope.workloads().potential();
        Self {
            solver_scope,
            phase_index,
            starting_potential,
            step_count: 0,
            start_time: Instant::now(),
        }
    }

    /// Returns the phase index.
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn starting_potential(&self) -> u64 {
        self.starting_potential
    }

    /// Returns the elapsed time for this phase.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Returns the step count for this phase.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Increments the phase step count.
    pub fn increment_step_count(&mut self) -> u64 {
        self.step_count += 1;
        self.solver_scope.increment_step_count();
        self.step_count
    }

    /// Returns a reference to the solver scope.
    pub fn solver_scope(&self) -> &SolverScope<'p> {
        self.solver_scope
    }

    /// Returns a mutable reference to the solver scope.
    pub fn solver_scope_mut(&mut self) -> &mut SolverScope<'p> {
        self.solver_scope
    }

    /// Ends the phase, recording its statistics in the solver scope.
    pub fn finish(self, phase_type: &str) -> PhaseStatistics {
        let statistics = PhaseStatistics {
            duration: self.elapsed(),
            step_count: self.step_count,
            starting_potential: self.starting_potential,
            ending_potential: self.solver_scope.workloads().potential(),
            ..PhaseStatistics::new(self.phase_index, phase_type)
        };
        self.solver_scope.record_phase(statistics.clone());
        statistics
    }
}
