//! Solver statistics collection and reporting.
//!
//! This module provides types for tracking what each phase did during a
//! solve: steps taken, time spent, and how the workload potential moved.

use std::time::Duration;

/// Statistics for a single solver phase.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhaseStatistics {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase (e.g., "GreedyConstruction", "FairnessRepair").
    pub phase_type: String,
    /// Time spent in this phase.
    pub duration: Duration,
    /// Number of steps taken in this phase.
    ///
    /// One step per day for construction, one per swap for repair.
    pub step_count: u64,
    /// Workload potential at the start of the phase.
    pub starting_potential: u64,
    /// Workload potential at the end of the phase.
    pub ending_potential: u64,
}

impl PhaseStatistics {
    /// Creates empty phase statistics.
    pub fn new(phase_index: usize, phase_type: impl Into<String>) -> Self {
        Self {
            phase_index,
            phase_type: phase_type.into(),
            duration: Duration::ZERO,
            step_count: 0,
            starting_potential: 0,
            ending_potential: 0,
        }
    }
}

/// Complete statistics for a solver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolverStatistics {
    /// Total time spent solving.
    pub total_duration: Duration,
    /// Total steps taken across all phases.
    pub total_step_count: u64,
    /// Potential when fairness repair started.
    pub initial_potential: u64,
    /// Potential when solving ended.
    pub final_potential: u64,
    /// Improving swaps applied by fairness repair.
    pub swap_count: u64,
    /// Repair passes, including the final clean pass.
    pub pass_count: u64,
    /// Statistics for each phase.
    pub phase_statistics: Vec<PhaseStatistics>,
}

impl SolverStatistics {
    /// Returns the number of phases.
    pub fn phase_count(&self) -> usize {
        self.phase_statistics.len()
    }

    /// Returns the statistics of the phase with the given type name.
    pub fn phase(&self, phase_type: &str) -> Option<&PhaseStatistics> {
        self.phase_statistics
            .iter()
            .find(|p| p.phase_type == phase_type)
    }

    /// Upper bound on swaps implied by the initial potential.
    pub fn swap_bound(&self) -> u64 {
        self.initial_potential / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_bound_halves_initial_potential() {
        let stats = SolverStatistics {
            initial_potential: 67,
            ..SolverStatistics::default()
        };
        assert_eq!(stats.swap_bound(), 33);
        assert_eq!(SolverStatistics::default().swap_bound(), 0);
    }

    #[test]
    fn test_phase_lookup_by_type() {
        let stats = SolverStatistics {
            phase_statistics: vec![
                PhaseStatistics::new(0, "GreedyConstruction"),
                PhaseStatistics::new(1, "FairnessRepair"),
            ],
            ..SolverStatistics::default()
        };
        assert_eq!(stats.phase_count(), 2);
        assert_eq!(stats.phase("FairnessRepair").map(|p| p.phase_index), Some(1));
        assert!(stats.phase("Unknown").is_none());
    }
}
