//! Fairness repair phase.
//!
//! Local search over day assignments. A day assigned to worker `w` admits
//! an *improving swap* to an available alternate `c` when
//! `load(c) < load(w) - 1`. Each pass walks the days in ascending order and
//! applies, per day, the improving swap to the least loaded alternate
//! (lowest id first on ties). The phase stops after the first pass that
//! applies no swap; at that point no day admits an improving swap under
//! the final workloads.
//!
//! # Termination
//!
//! Let `Φ = Σ load²`. Moving one day from `w` to `c` with
//! `load(c) ≤ load(w) - 2` changes `Φ` by `2 - 2·(load(w) - load(c)) ≤ -2`.
//! `Φ` is non-negative, so at most `Φ_initial / 2` swaps can happen. The
//! phase asserts this bound; exceeding it means the swap rule is broken.

use rosterfair_config::EnvironmentMode;
use rosterfair_core::{audit, AvailabilitySet, WorkerId};
use tracing::{debug, info, trace};

use super::Phase;
use crate::scope::{PhaseScope, SolverScope};
use crate::workload::WorkloadTracker;

const PHASE_NAME: &str = "Fairness Repair";

/// Local search phase enforcing the per-day fairness fixed point.
#[derive(Debug, Clone, Copy, Default)]
pub struct FairnessRepairPhase;

impl FairnessRepairPhase {
    pub fn new() -> Self {
        Self
    }

    /// Returns the alternate a day held by `incumbent` should move to, if
    /// any alternate is at least two days below the incumbent.
    ///
    /// Picks the least loaded alternate, lowest id first on ties.
    pub fn find_improving_swap(
        incumbent: WorkerId,
        availability: &AvailabilitySet,
        workloads: &WorkloadTracker,
    ) -> Option<WorkerId> {
        let incumbent_load = workloads.load(incumbent);
        workloads
            .least_loaded(availability.iter().filter(|&c| c != incumbent))
            .filter(|&c| workloads.load(c) + 1 < incumbent_load)
    }

    /// Runs one pass over every day, returning the number of swaps applied.
    fn run_pass(phase_scope: &mut PhaseScope<'_, '_>, swap_bound: u64, swaps_so_far: u64) -> u64 {
        let problem = phase_scope.solver_scope().problem();
        let mut swaps = 0;

        for (day, availability) in problem.days().iter().enumerate() {
            let Some(incumbent) = phase_scope.solver_scope().assignment(day).worker() else {
                continue;
            };
            let Some(candidate) = Self::find_improving_swap(
                incumbent,
                availability,
                phase_scope.solver_scope().workloads(),
            ) else {
                continue;
            };

            phase_scope.solver_scope_mut().reassign_day(day, candidate);
            swaps += 1;
            let step = phase_scope.increment_step_count();

            let workloads = phase_scope.solver_scope().workloads();
            trace!(
                event = "swap",
                step = step,
                day = day as u64,
                from = incumbent.index() as u64,
                to = candidate.index() as u64,
                from_load = workloads.load(incumbent) as u64,
                to_load = workloads.load(candidate) as u64,
            );

            let total = swaps_so_far + swaps;
            assert!(
                total <= swap_bound,
                "fairness repair applied {total} swaps, above the bound of {swap_bound} \
                 set by the initial potential"
            );
        }

        swaps
    }
}

impl Phase for FairnessRepairPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) {
        let mut phase_scope = PhaseScope::new(solver_scope);
        let mode = phase_scope.solver_scope().environment_mode();
        let initial_potential = phase_scope.starting_potential();
        let swap_bound = initial_potential / 2;
        phase_scope
            .solver_scope_mut()
            .set_initial_potential(initial_potential);

        info!(
            event = "phase_start",
            phase = PHASE_NAME,
            phase_index = phase_scope.phase_index() as u64,
            potential = initial_potential,
        );

        let mut swaps = 0;
        let mut passes = 0;
        loop {
            let pass_swaps = Self::run_pass(&mut phase_scope, swap_bound, swaps);
            swaps += pass_swaps;
            passes += 1;

            debug!(
                event = "pass",
                pass = passes,
                swaps = pass_swaps,
                potential = phase_scope.solver_scope().workloads().potential(),
            );

            if mode == EnvironmentMode::FullAssert {
                assert!(
                    phase_scope.solver_scope().workloads_consistent(),
                    "workload tracker diverged from the assignments in repair pass {passes}"
                );
            }

            if pass_swaps == 0 {
                break;
            }
        }

        phase_scope.solver_scope_mut().record_repair(swaps, passes);

        if mode.is_asserting() {
            assert!(
                phase_scope.solver_scope().workloads_consistent(),
                "workload tracker diverged from the assignments after repair"
            );
            assert!(
                2 * swaps <= initial_potential,
                "fairness repair applied {swaps} swaps from initial potential {initial_potential}"
            );
        }
        if mode == EnvironmentMode::FullAssert {
            let problem = phase_scope.solver_scope().problem();
            let assignments = phase_scope.solver_scope().assignments();
            if let Err(violation) = audit::check_feasibility(problem, assignments)
                .and_then(|()| audit::check_fairness(problem, assignments))
            {
                panic!("fairness repair ended on a broken roster: {violation}");
            }
        }

        let stats = phase_scope.finish(self.phase_type_name());
        info!(
            event = "phase_end",
            phase = PHASE_NAME,
            phase_index = stats.phase_index as u64,
            duration_ms = stats.duration.as_millis() as u64,
            steps = stats.step_count,
            passes = passes,
            potential = stats.ending_potential,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "FairnessRepair"
    }
}

#[cfg(test)]
mod tests;
