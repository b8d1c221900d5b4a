//! End-to-end scenarios audited with the independent checkers.

use rosterfair::prelude::*;
use rosterfair::AuditViolation;
use rosterfair_test::fixtures::{self, Scenario};
use rosterfair_test::seeded_rng;

fn asserting_solver() -> Solver {
    Solver::new(SolverConfig::new().with_environment_mode(EnvironmentMode::FullAssert))
}

fn assert_sound(scenario: &Scenario, schedule: &Schedule) {
    let problem = &scenario.problem;
    assert_eq!(schedule.day_count(), problem.day_count(), "{}", scenario.name);
    if let Err(violations) = audit::audit(problem, schedule.assignments()) {
        panic!("{}: {:?}", scenario.name, violations);
    }

    let stats = schedule.statistics();
    assert!(
        stats.swap_count <= stats.swap_bound(),
        "{}: {} swaps from potential {}",
        scenario.name,
        stats.swap_count,
        stats.initial_potential
    );
    assert_eq!(
        schedule.workloads(),
        audit::workloads(problem.worker_count(), schedule.assignments()).as_slice()
    );
}

#[test]
fn test_single_worker_single_day() {
    let (assignments, imbalance) = compute_schedule(1, &[vec![0]]).unwrap().into_parts();
    assert_eq!(assignments, vec![Assignment::Assigned(WorkerId(0))]);
    assert_eq!(imbalance, 0);
}

#[test]
fn test_nobody_available() {
    let problem = fixtures::no_availability();
    let schedule = Solver::default().solve(&problem);
    assert_eq!(schedule.assignments(), &[Assignment::Unassigned; 9]);
    assert_eq!(schedule.imbalance(), 0);
    assert_eq!(schedule.workloads(), &[0; 10]);
}

#[test]
fn test_all_available_is_perfectly_even() {
    let problem = fixtures::all_available_permuted();
    let schedule = Solver::default().solve(&problem);
    assert_eq!(schedule.workloads(), &[4; 5]);
    assert_eq!(schedule.imbalance(), 0);
    assert_eq!(schedule.statistics().swap_count, 0);
}

#[test]
fn test_checkers_accept_all_available_output() {
    let problem = fixtures::all_available_permuted();
    let schedule = compute_schedule(5, &fixtures::PERMUTED_DAYS).unwrap();
    assert_eq!(audit::check_feasibility(&problem, schedule.assignments()), Ok(()));
    assert_eq!(audit::check_fairness(&problem, schedule.assignments()), Ok(()));
}

#[test]
fn test_sparse_workers_get_their_days() {
    let problem = fixtures::sparse_pair();
    let schedule = Solver::default().solve(&problem);

    let days = schedule.days_by_worker();
    assert_eq!(days[1], vec![0, 1]);
    assert_eq!(days[2], vec![2, 3]);
    assert_eq!(days[0], vec![4, 5, 6, 7, 8, 9]);
    assert_eq!(schedule.workloads(), &[6, 2, 2]);
    assert_eq!(schedule.imbalance(), 4);
}

#[test]
fn test_fixed_scenarios_are_sound() {
    for scenario in fixtures::fixed_scenarios() {
        let schedule = asserting_solver().solve(&scenario.problem);
        assert_sound(&scenario, &schedule);
    }
}

#[test]
fn test_random_scenarios_are_sound() {
    for seed in 0..40 {
        let mut rng = seeded_rng(seed);
        for scenario in fixtures::random_scenarios(&mut rng) {
            let schedule = asserting_solver().solve(&scenario.problem);
            assert_sound(&scenario, &schedule);
        }
    }
}

#[test]
fn test_repeated_calls_agree() {
    let mut rng = seeded_rng(7);
    for scenario in fixtures::random_scenarios(&mut rng) {
        let first = Solver::default().solve(&scenario.problem);
        let second = Solver::default().solve(&scenario.problem);
        assert_eq!(first.assignments(), second.assignments(), "{}", scenario.name);
        assert_eq!(first.imbalance(), second.imbalance());
    }
}

#[test]
fn test_repair_of_solved_schedule_is_a_no_op() {
    let mut rng = seeded_rng(21);
    for scenario in fixtures::random_scenarios(&mut rng) {
        let solved = Solver::default().solve(&scenario.problem);
        let again = Solver::default()
            .repair(&scenario.problem, solved.assignments().to_vec())
            .unwrap();
        assert_eq!(again.statistics().swap_count, 0, "{}", scenario.name);
        assert_eq!(again.assignments(), solved.assignments());
    }
}

#[test]
fn test_invalid_arguments() {
    let err = compute_schedule(3, &[vec![0, 1], vec![3]]).unwrap_err();
    assert_eq!(
        err,
        RosterError::WorkerOutOfRange {
            day: 1,
            worker: 3,
            worker_count: 3
        }
    );
    assert!(err.is_invalid_argument());

    let err = RosterProblem::from_signed(-1, &[vec![0i64]]).unwrap_err();
    assert_eq!(err, RosterError::NegativeWorkerCount { worker_count: -1 });

    let err = RosterProblem::from_signed(2, &[vec![1i64], vec![-4]]).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_checkers_flag_unfair_roster() {
    let problem = fixtures::sparse_pair();
    let lopsided = vec![Assignment::Assigned(WorkerId(0)); 10];
    assert_eq!(audit::check_feasibility(&problem, &lopsided), Ok(()));

    let violation = audit::check_fairness(&problem, &lopsided).unwrap_err();
    assert!(matches!(
        violation,
        AuditViolation::UnfairDay { day: 0, assigned: WorkerId(0), .. }
    ));
}
