//! Tests for scope types.

use super::*;
use rosterfair_config::EnvironmentMode;
use rosterfair_core::{Assignment, RosterProblem, WorkerId};

fn create_problem() -> RosterProblem {
    RosterProblem::from_indices(2, &[vec![0, 1], vec![0], vec![]]).unwrap()
}

#[test]
fn test_solver_scope_starts_unassigned() {
    let problem = create_problem();
    let scope = SolverScope::new(&problem, EnvironmentMode::Production);
    assert_eq!(scope.assignments(), &[Assignment::Unassigned; 3]);
    assert_eq!(scope.workloads().total(), 0);
    assert_eq!(scope.total_step_count(), 0);
}

#[test]
fn test_assign_and_reassign() {
    let problem = create_problem();
    let mut scope = SolverScope::new(&problem, EnvironmentMode::Production);

    scope.assign_day(0, WorkerId(0));
    scope.assign_day(1, WorkerId(0));
    assert_eq!(scope.workloads().load(WorkerId(0)), 2);

    let previous = scope.reassign_day(0, WorkerId(1));
    assert_eq!(previous, WorkerId(0));
    assert_eq!(scope.assignment(0), Assignment::Assigned(WorkerId(1)));
    assert_eq!(scope.workloads().as_slice(), &[1, 1]);
    assert!(scope.workloads_consistent());
}

#[test]
#[should_panic(expected = "cannot reassign unassigned day")]
fn test_reassign_unassigned_panics() {
    let problem = create_problem();
    let mut scope = SolverScope::new(&problem, EnvironmentMode::Production);
    scope.reassign_day(2, WorkerId(0));
}

#[test]
fn test_with_assignments_rescans() {
    let problem = create_problem();
    let seed = vec![
        Assignment::Assigned(WorkerId(0)),
        Assignment::Assigned(WorkerId(0)),
        Assignment::Unassigned,
    ];
    let scope = SolverScope::with_assignments(&problem, EnvironmentMode::Production, seed);
    assert_eq!(scope.workloads().as_slice(), &[2, 0]);
    assert!(scope.workloads_consistent());
}

#[test]
fn test_phase_scope_counts_steps() {
    let problem = create_problem();
    let mut scope = SolverScope::new(&problem, EnvironmentMode::Production);
    scope.start_solving();

    let mut phase = PhaseScope::new(&mut scope);
    assert_eq!(phase.phase_index(), 0);
    phase.increment_step_count();
    phase.increment_step_count();
    assert_eq!(phase.step_count(), 2);

    let stats = phase.finish("Test");
    assert_eq!(stats.step_count, 2);
    assert_eq!(stats.phase_type, "Test");
    assert_eq!(scope.total_step_count(), 2);
    assert_eq!(scope.phase_count(), 1);

    let next = PhaseScope::new(&mut scope);
    assert_eq!(next.phase_index(), 1);
}

#[test]
fn test_phase_scope_tracks_potential() {
    let problem = create_problem();
    let mut scope = SolverScope::new(&problem, EnvironmentMode::Production);
    scope.assign_day(0, WorkerId(0));

    let mut phase = PhaseScope::new(&mut scope);
    assert_eq!(phase.starting_potential(), 1);
    phase.solver_scope_mut().assign_day(1, WorkerId(0));
    let stats = phase.finish("Test");
    assert_eq!(stats.starting_potential, 1);
    assert_eq!(stats.ending_potential, 4);
}

#[test]
fn test_into_schedule() {
    let problem = create_problem();
    let mut scope = SolverScope::new(&problem, EnvironmentMode::Production);
    scope.assign_day(0, WorkerId(1));
    scope.assign_day(1, WorkerId(0));
    scope.record_repair(0, 1);

    let schedule = scope.into_schedule();
    assert_eq!(schedule.workloads(), &[1, 1]);
    assert_eq!(schedule.imbalance(), 0);
    assert_eq!(schedule.statistics().pass_count, 1);
    assert_eq!(schedule.statistics().final_potential, 2);
}
