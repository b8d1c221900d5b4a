//! Tests for the fairness repair phase.

use super::*;
use crate::phase::GreedyConstructionPhase;
use rosterfair_core::{Assignment, RosterProblem};
use rosterfair_test::{fixtures, generators, seeded_rng};

fn tracker(loads: &[usize]) -> WorkloadTracker {
    let assignments: Vec<Assignment> = loads
        .iter()
        .enumerate()
        .flat_map(|(w, &n)| std::iter::repeat(Assignment::Assigned(WorkerId(w))).take(n))
        .collect();
    WorkloadTracker::rescan(loads.len(), &assignments)
}

fn workers(indices: &[usize]) -> Vec<Assignment> {
    indices
        .iter()
        .map(|&i| Assignment::Assigned(WorkerId(i)))
        .collect()
}

fn repair(problem: &RosterProblem, seed: Vec<Assignment>) -> SolverScope<'_> {
    let mut scope = SolverScope::with_assignments(problem, EnvironmentMode::FullAssert, seed);
    FairnessRepairPhase::new().solve(&mut scope);
    scope
}

#[test]
fn test_gap_of_two_is_improving() {
    let set = AvailabilitySet::from_indices([0, 1]);
    let swap = FairnessRepairPhase::find_improving_swap(WorkerId(0), &set, &tracker(&[3, 1]));
    assert_eq!(swap, Some(WorkerId(1)));
}

#[test]
fn test_gap_of_one_is_not_improving() {
    let set = AvailabilitySet::from_indices([0, 1]);
    let swap = FairnessRepairPhase::find_improving_swap(WorkerId(0), &set, &tracker(&[2, 1]));
    assert_eq!(swap, None);
}

#[test]
fn test_picks_least_loaded_then_lowest_id() {
    let set = AvailabilitySet::from_indices([0, 1, 2, 3]);
    let loads = tracker(&[5, 2, 1, 1]);
    let swap = FairnessRepairPhase::find_improving_swap(WorkerId(0), &set, &loads);
    assert_eq!(swap, Some(WorkerId(2)));
}

#[test]
fn test_ignores_unavailable_workers() {
    let set = AvailabilitySet::from_indices([0, 2]);
    let loads = tracker(&[4, 0, 3]);
    let swap = FairnessRepairPhase::find_improving_swap(WorkerId(0), &set, &loads);
    assert_eq!(swap, None);
}

#[test]
fn test_alone_on_a_day() {
    let set = AvailabilitySet::from_indices([1]);
    let swap = FairnessRepairPhase::find_improving_swap(WorkerId(1), &set, &tracker(&[0, 9]));
    assert_eq!(swap, None);
}

#[test]
fn test_rebalances_overloaded_seed() {
    let problem = RosterProblem::from_indices(3, &vec![vec![0, 1, 2]; 6]).unwrap();
    let scope = repair(&problem, workers(&[0; 6]));

    assert_eq!(scope.assignments(), workers(&[1, 2, 1, 2, 0, 0]).as_slice());
    assert_eq!(scope.workloads().as_slice(), &[2, 2, 2]);
    assert_eq!(scope.swap_count(), 4);
    assert_eq!(scope.pass_count(), 2);
    assert_eq!(scope.initial_potential(), 36);
}

#[test]
fn test_sparse_workers_take_their_days() {
    let problem = fixtures::sparse_pair();
    let mut scope = SolverScope::new(&problem, EnvironmentMode::FullAssert);
    GreedyConstructionPhase::new().solve(&mut scope);
    assert_eq!(scope.workloads().as_slice(), &[8, 1, 1]);

    FairnessRepairPhase::new().solve(&mut scope);
    assert_eq!(
        scope.assignments(),
        workers(&[1, 1, 2, 2, 0, 0, 0, 0, 0, 0]).as_slice()
    );
    assert_eq!(scope.workloads().as_slice(), &[6, 2, 2]);
    assert_eq!(scope.swap_count(), 2);
    assert_eq!(scope.initial_potential(), 66);
}

#[test]
fn test_fair_seed_is_left_alone() {
    let problem = RosterProblem::from_indices(2, &[vec![0, 1], vec![0, 1], vec![0]]).unwrap();
    let seed = workers(&[1, 0, 0]);
    let scope = repair(&problem, seed.clone());

    assert_eq!(scope.assignments(), seed.as_slice());
    assert_eq!(scope.swap_count(), 0);
    assert_eq!(scope.pass_count(), 1);
}

#[test]
fn test_second_run_performs_no_swaps() {
    let problem = RosterProblem::from_indices(3, &vec![vec![0, 1, 2]; 9]).unwrap();
    let first = repair(&problem, workers(&[2; 9]));
    assert!(first.swap_count() > 0);

    let second = repair(&problem, first.assignments().to_vec());
    assert_eq!(second.swap_count(), 0);
    assert_eq!(second.assignments(), first.assignments());
}

#[test]
fn test_records_phase_statistics() {
    let problem = RosterProblem::from_indices(3, &vec![vec![0, 1, 2]; 6]).unwrap();
    let scope = repair(&problem, workers(&[0; 6]));

    let stats = &scope.phase_statistics()[0];
    assert_eq!(stats.phase_type, "FairnessRepair");
    assert_eq!(stats.step_count, 4);
    assert_eq!(stats.starting_potential, 36);
    assert_eq!(stats.ending_potential, 12);
}

#[test]
fn test_swap_bound_holds_on_random_inputs() {
    let mut rng = seeded_rng(7);
    for case in 0..200 {
        let worker_count = 1 + case % 7;
        let day_count = 5 + case % 40;
        let probability = 0.1 + (case % 9) as f64 * 0.1;
        let days = generators::uniform_availability(&mut rng, worker_count, day_count, probability);
        let problem = RosterProblem::new(worker_count, days).unwrap();

        let mut scope = SolverScope::new(&problem, EnvironmentMode::FullAssert);
        GreedyConstructionPhase::new().solve(&mut scope);
        FairnessRepairPhase::new().solve(&mut scope);

        assert!(2 * scope.swap_count() <= scope.initial_potential());
        assert!(audit::check_fairness(&problem, scope.assignments()).is_ok());
    }
}
