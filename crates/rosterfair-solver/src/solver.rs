//! Solver entry points.
//!
//! Logging levels:
//! - **INFO**: Solver start/end, phase summaries
//! - **DEBUG**: One event per repair pass
//! - **TRACE**: Individual placements and swaps

use rosterfair_config::SolverConfig;
use rosterfair_core::{audit, Assignment, Result, RosterProblem};
use tracing::{debug, info};

use crate::phase::{FairnessRepairPhase, GreedyConstructionPhase, Phase};
use crate::schedule::Schedule;
use crate::scope::SolverScope;

/// Runs greedy construction followed by fairness repair.
///
/// A solver holds no state between calls; identical problems always
/// produce identical schedules.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes a feasible and fair schedule for `problem`.
    pub fn solve(&self, problem: &RosterProblem) -> Schedule {
        info!(
            event = "solve_start",
            day_count = problem.day_count() as u64,
            worker_count = problem.worker_count() as u64,
            empty_day_count = problem.empty_day_count() as u64,
        );

        let mut scope = SolverScope::new(problem, self.config.environment_mode);
        scope.start_solving();

        let mut construction = GreedyConstructionPhase::new();
        let mut repair = FairnessRepairPhase::new();
        let phases: [&mut dyn Phase; 2] = [&mut construction, &mut repair];
        for (idx, phase) in phases.into_iter().enumerate() {
            debug!("Starting phase {} ({})", idx, phase.phase_type_name());
            phase.solve(&mut scope);
        }

        finish(scope)
    }

    /// Runs only fairness repair, starting from a caller-supplied assignment.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InfeasibleAssignment`] if `assignments` is not
    /// feasible for `problem`.
    ///
    /// [`RosterError::InfeasibleAssignment`]: rosterfair_core::RosterError::InfeasibleAssignment
    pub fn repair(&self, problem: &RosterProblem, assignments: Vec<Assignment>) -> Result<Schedule> {
        audit::check_feasibility(problem, &assignments)?;

        info!(
            event = "solve_start",
            day_count = problem.day_count() as u64,
            worker_count = problem.worker_count() as u64,
            empty_day_count = problem.empty_day_count() as u64,
        );

        let mut scope =
            SolverScope::with_assignments(problem, self.config.environment_mode, assignments);
        scope.start_solving();
        FairnessRepairPhase::new().solve(&mut scope);

        Ok(finish(scope))
    }
}

fn finish(scope: SolverScope<'_>) -> Schedule {
    let schedule = scope.into_schedule();
    let stats = schedule.statistics();
    info!(
        event = "solve_end",
        imbalance = schedule.imbalance() as u64,
        swaps = stats.swap_count,
        swap_bound = stats.swap_bound(),
        passes = stats.pass_count,
        steps = stats.total_step_count,
        duration_ms = stats.total_duration.as_millis() as u64,
    );
    schedule
}

/// Assigns one available worker to every day, as evenly as the
/// availability allows, using the default configuration.
///
/// # Errors
///
/// Returns an invalid-argument [`RosterError`](rosterfair_core::RosterError)
/// if any day lists a worker outside `0..worker_count`. Nothing is computed
/// in that case.
///
/// # Example
///
/// ```
/// use rosterfair_solver::compute_schedule;
/// use rosterfair_core::{Assignment, WorkerId};
///
/// let schedule = compute_schedule(2, &[vec![0, 1], vec![0], vec![], vec![0, 1]]).unwrap();
/// let (assignments, imbalance) = schedule.into_parts();
///
/// assert_eq!(assignments[2], Assignment::Unassigned);
/// assert_eq!(assignments[1], Assignment::Assigned(WorkerId(0)));
/// assert!(imbalance <= 1);
/// ```
pub fn compute_schedule<D: AsRef<[usize]>>(
    worker_count: usize,
    availability_by_day: &[D],
) -> Result<Schedule> {
    let problem = RosterProblem::from_indices(worker_count, availability_by_day)?;
    Ok(Solver::default().solve(&problem))
}
