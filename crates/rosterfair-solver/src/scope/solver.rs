//! Solver-level scope.

use std::time::{Duration, Instant};

use rosterfair_config::EnvironmentMode;
use rosterfair_core::{Assignment, DayIndex, RosterProblem, WorkerId};

use crate::schedule::Schedule;
use crate::statistics::{PhaseStatistics, SolverStatistics};
use crate::workload::WorkloadTracker;

/// Top-level scope for the entire solving process.
///
/// Owns the working assignment sequence and its workload tracker for the
/// duration of one solve; nothing here outlives the call.
pub struct SolverScope<'p> {
    problem: &'p RosterProblem,
    environment_mode: EnvironmentMode,
    assignments: Vec<Assignment>,
    workloads: WorkloadTracker,
    start_time: Option<Instant>,
    total_step_count: u64,
    initial_potential: u64,
    swap_count: u64,
    pass_count: u64,
    phase_statistics: Vec<PhaseStatistics>,
}

impl<'p> SolverScope<'p> {
    /// Creates a scope with every day unassigned.
    pub fn new(problem: &'p RosterProblem, environment_mode: EnvironmentMode) -> Self {
        Self {
            problem,
            environment_mode,
            assignments: vec![Assignment::Unassigned; problem.day_count()],
            workloads: WorkloadTracker::new(problem.worker_count()),
            start_time: None,
            total_step_count: 0,
            initial_potential: 0,
            swap_count: 0,
            pass_count: 0,
            phase_statistics: Vec::new(),
        }
    }

    /// Creates a scope seeded with an existing assignment sequence.
    ///
    /// The caller is responsible for the seed being feasible.
    pub fn with_assignments(
        problem: &'p RosterProblem,
        environment_mode: EnvironmentMode,
        assignments: Vec<Assignment>,
    ) -> Self {
        let workloads = WorkloadTracker::rescan(problem.worker_count(), &assignments);
        Self {
            assignments,
            workloads,
            ..Self::new(problem, environment_mode)
        }
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.total_step_count = 0;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn problem(&self) -> &'p RosterProblem {
        self.problem
    }

    pub fn environment_mode(&self) -> EnvironmentMode {
        self.environment_mode
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment(&self, day: DayIndex) -> Assignment {
        self.assignments[day]
    }

    pub fn workloads(&self) -> &WorkloadTracker {
        &self.workloads
    }

    /// Places `worker` on an unassigned `day`.
    pub fn assign_day(&mut self, day: DayIndex, worker: WorkerId) {
        debug_assert!(
            !self.assignments[day].is_assigned(),
            "day {day} is already assigned"
        );
        self.assignments[day] = Assignment::Assigned(worker);
        self.workloads.assign(worker);
    }

    /// Moves an assigned `day` to `worker`, returning the previous assignee.
    ///
    /// # Panics
    /// Panics if `day` is unassigned.
    pub fn reassign_day(&mut self, day: DayIndex, worker: WorkerId) -> WorkerId {
        let Assignment::Assigned(previous) = self.assignments[day] else {
            panic!("cannot reassign unassigned day {day}");
        };
        self.assignments[day] = Assignment::Assigned(worker);
        self.workloads.transfer(previous, worker);
        previous
    }

    /// Returns true if the tracker agrees with a full rescan.
    pub fn workloads_consistent(&self) -> bool {
        WorkloadTracker::rescan(self.problem.worker_count(), &self.assignments) == self.workloads
    }

    pub fn total_step_count(&self) -> u64 {
        self.total_step_count
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.total_step_count += 1;
        self.total_step_count
    }

    pub fn initial_potential(&self) -> u64 {
        self.initial_potential
    }

    pub fn set_initial_potential(&mut self, potential: u64) {
        self.initial_potential = potential;
    }

    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    pub fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Adds the outcome of a repair run.
    pub fn record_repair(&mut self, swaps: u64, passes: u64) {
        self.swap_count += swaps;
        self.pass_count += passes;
    }

    pub fn phase_count(&self) -> usize {
        self.phase_statistics.len()
    }

    pub fn record_phase(&mut self, statistics: PhaseStatistics) {
        self.phase_statistics.push(statistics);
    }

    pub fn phase_statistics(&self) -> &[PhaseStatistics] {
        &self.phase_statistics
    }

    /// Freezes the working state into the final schedule.
    pub fn into_schedule(self) -> Schedule {
        let statistics = SolverStatistics {
            total_duration: self.elapsed(),
            total_step_count: self.total_step_count,
            initial_potential: self.initial_potential,
            final_potential: self.workloads.potential(),
            swap_count: self.swap_count,
            pass_count: self.pass_count,
            phase_statistics: self.phase_statistics,
        };
        let imbalance = self.workloads.spread();
        Schedule::new(
            self.assignments,
            self.workloads.into_vec(),
            imbalance,
            statistics,
        )
    }
}
