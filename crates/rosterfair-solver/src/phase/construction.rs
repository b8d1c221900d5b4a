//! Greedy construction phase.
//!
//! Walks the days in ascending order and gives each day to the currently
//! least loaded available worker, lowest id first on ties. Days nobody is
//! available for stay unassigned.
//!
//! The result is feasible and fair at the moment each day is placed, but
//! later days can push a worker past someone favored earlier, so global
//! fairness is left to [`FairnessRepairPhase`](super::FairnessRepairPhase).

use rosterfair_config::EnvironmentMode;
use rosterfair_core::audit;
use tracing::{info, trace};

use super::Phase;
use crate::scope::{PhaseScope, SolverScope};

const PHASE_NAME: &str = "Greedy Construction";

/// Construction phase placing every day on its least loaded available worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstructionPhase;

impl GreedyConstructionPhase {
    pub fn new() -> Self {
        Self
    }
}

impl Phase for GreedyConstructionPhase {
    fn solve(&mut self, solver_scope: &mut SolverScope<'_>) {
        let mut phase_scope = PhaseScope::new(solver_scope);
        let problem = phase_scope.solver_scope().problem();

        info!(
            event = "phase_start",
            phase = PHASE_NAME,
            phase_index = phase_scope.phase_index() as u64,
        );

        for (day, availability) in problem.days().iter().enumerate() {
            let chosen = phase_scope
                .solver_scope()
                .workloads()
                .least_loaded(availability);

            match chosen {
                Some(worker) => {
                    phase_scope.solver_scope_mut().assign_day(day, worker);
                    trace!(
                        event = "place",
                        day = day as u64,
                        worker = worker.index() as u64,
                        load = phase_scope.solver_scope().workloads().load(worker) as u64,
                    );
                }
                None => {
                    trace!(event = "place", day = day as u64, unassigned = true);
                }
            }
            phase_scope.increment_step_count();
        }

        if phase_scope.solver_scope().environment_mode().is_asserting() {
            assert!(
                phase_scope.solver_scope().workloads_consistent(),
                "workload tracker diverged from the assignments after construction"
            );
        }
        if phase_scope.solver_scope().environment_mode() == EnvironmentMode::FullAssert {
            if let Err(violation) =
                audit::check_feasibility(problem, phase_scope.solver_scope().assignments())
            {
                panic!("greedy construction produced an infeasible roster: {violation}");
            }
        }

        let stats = phase_scope.finish(self.phase_type_name());
        info!(
            event = "phase_end",
            phase = PHASE_NAME,
            phase_index = stats.phase_index as u64,
            duration_ms = stats.duration.as_millis() as u64,
            steps = stats.step_count,
            potential = stats.ending_potential,
        );
    }

    fn phase_type_name(&self) -> &'static str {
        "GreedyConstruction"
    }
}
