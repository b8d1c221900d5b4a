//! Solver output.

use rosterfair_core::{audit, Assignment, DayIndex, WorkerId};

use crate::statistics::SolverStatistics;

/// The frozen result of one solve.
///
/// `imbalance` is the spread between the busiest and the idlest worker over
/// all workers. It is a diagnostic only; fairness is the per-day guarantee
/// that no available alternate is more than one day below the assignee.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Schedule {
    assignments: Vec<Assignment>,
    workloads: Vec<usize>,
    imbalance: usize,
    statistics: SolverStatistics,
}

impl Schedule {
    pub(crate) fn new(
        assignments: Vec<Assignment>,
        workloads: Vec<usize>,
        imbalance: usize,
        statistics: SolverStatistics,
    ) -> Self {
        Self {
            assignments,
            workloads,
            imbalance,
            statistics,
        }
    }

    /// Returns the assignment of every day, in day order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn assignment(&self, day: DayIndex) -> Assignment {
        self.assignments[day]
    }

    /// Returns the final workload of every worker.
    pub fn workloads(&self) -> &[usize] {
        &self.workloads
    }

    pub fn workload(&self, worker: WorkerId) -> usize {
        self.workloads[worker.index()]
    }

    /// Returns max workload minus min workload.
    pub fn imbalance(&self) -> usize {
        self.imbalance
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    pub fn day_count(&self) -> usize {
        self.assignments.len()
    }

    /// Lists the assigned days of every worker.
    pub fn days_by_worker(&self) -> Vec<Vec<DayIndex>> {
        audit::assignments_by_worker(self.workloads.len(), &self.assignments)
    }

    /// Splits into the assignment sequence and the imbalance score.
    pub fn into_parts(self) -> (Vec<Assignment>, usize) {
        (self.assignments, self.imbalance)
    }
}
