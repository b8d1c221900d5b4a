//! Independent audit of a finished roster.
//!
//! These predicates re-derive everything from the problem and the day
//! assignments alone. They never look at solver state, which makes them
//! usable as an auditor for any allocator.
//!
//! Checks:
//! - Length: one assignment per day
//! - Feasibility: every non-empty day is covered by an available worker,
//!   every empty day is unassigned
//! - Fairness: no available alternate on any day has a workload more than
//!   one below the assigned worker's final workload

use thiserror::Error;

use crate::assignment::Assignment;
use crate::problem::RosterProblem;
use crate::worker::{DayIndex, WorkerId};

/// A single broken invariant found by the audit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditViolation {
    /// Assignment sequence length differs from the day count.
    #[error("expected {expected} assignments, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A worker id outside `0..worker_count` was assigned.
    #[error("day {day} assigned to unknown worker {worker}")]
    UnknownWorker { day: DayIndex, worker: WorkerId },

    /// A worker was assigned on a day they did not declare.
    #[error("worker {worker} was assigned day {day} despite unavailability")]
    UnavailableWorker { day: DayIndex, worker: WorkerId },

    /// A day with available workers was left unassigned.
    #[error("day {day} is unassigned although {available} workers are available")]
    MissingAssignment { day: DayIndex, available: usize },

    /// A day with nobody available carries an assignment.
    #[error("day {day} has no availability but is assigned to {worker}")]
    AssignedOnEmptyDay { day: DayIndex, worker: WorkerId },

    /// An available alternate has a workload at least two below the assignee.
    #[error(
        "day {day} assigned to worker {assigned} (load {assigned_load}) even though worker \
         {alternate} (load {alternate_load}) had sufficiently lower total workload"
    )]
    UnfairDay {
        day: DayIndex,
        assigned: WorkerId,
        assigned_load: usize,
        alternate: WorkerId,
        alternate_load: usize,
    },
}

/// Lists, for each worker, the days they are available.
pub fn availability_by_worker(problem: &RosterProblem) -> Vec<Vec<DayIndex>> {
    let mut result = vec![Vec::new(); problem.worker_count()];
    for (day, set) in problem.days().iter().enumerate() {
        for worker in set {
            result[worker.index()].push(day);
        }
    }
    result
}

/// Lists, for each worker, the days they are assigned.
///
/// Assignments to workers outside `0..worker_count` are skipped.
pub fn assignments_by_worker(worker_count: usize, assignments: &[Assignment]) -> Vec<Vec<DayIndex>> {
    let mut result = vec![Vec::new(); worker_count];
    for (day, assignment) in assignments.iter().enumerate() {
        if let Some(days) = assignment.worker().and_then(|w| result.get_mut(w.index())) {
            days.push(day);
        }
    }
    result
}

/// Counts assigned days per worker by full rescan.
pub fn workloads(worker_count: usize, assignments: &[Assignment]) -> Vec<usize> {
    let mut loads = vec![0; worker_count];
    for worker in assignments.iter().filter_map(|a| a.worker()) {
        if let Some(load) = loads.get_mut(worker.index()) {
            *load += 1;
        }
    }
    loads
}

pub fn check_length(
    problem: &RosterProblem,
    assignments: &[Assignment],
) -> Result<(), AuditViolation> {
    if assignments.len() == problem.day_count() {
        Ok(())
    } else {
        Err(AuditViolation::LengthMismatch {
            expected: problem.day_count(),
            actual: assignments.len(),
        })
    }
}

/// Verifies length and feasibility, stopping at the first violation.
pub fn check_feasibility(
    problem: &RosterProblem,
    assignments: &[Assignment],
) -> Result<(), AuditViolation> {
    check_length(problem, assignments)?;
    match feasibility_violations(problem, assignments).next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Verifies the fairness fixed point against final workloads, stopping at
/// the first violation.
///
/// Assumes a feasible assignment; run [`check_feasibility`] first.
pub fn check_fairness(
    problem: &RosterProblem,
    assignments: &[Assignment],
) -> Result<(), AuditViolation> {
    check_length(problem, assignments)?;
    let loads = workloads(problem.worker_count(), assignments);
    let first = fairness_violations(problem, assignments, &loads).next();
    match first {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Runs every check and collects all violations.
///
/// # Returns
/// `Ok(())` if the roster is feasible and fair, `Err(violations)` otherwise.
pub fn audit(problem: &RosterProblem, assignments: &[Assignment]) -> Result<(), Vec<AuditViolation>> {
    if let Err(violation) = check_length(problem, assignments) {
        return Err(vec![violation]);
    }

    let loads = workloads(problem.worker_count(), assignments);
    let violations: Vec<_> = feasibility_violations(problem, assignments)
        .chain(fairness_violations(problem, assignments, &loads))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn feasibility_violations<'a>(
    problem: &'a RosterProblem,
    assignments: &'a [Assignment],
) -> impl Iterator<Item = AuditViolation> + 'a {
    let worker_count = problem.worker_count();
    problem
        .days()
        .iter()
        .zip(assignments)
        .enumerate()
        .filter_map(move |(day, (set, assignment))| match *assignment {
            Assignment::Assigned(worker) if worker.index() >= worker_count => {
                Some(AuditViolation::UnknownWorker { day, worker })
            }
            Assignment::Assigned(worker) if set.is_empty() => {
                Some(AuditViolation::AssignedOnEmptyDay { day, worker })
            }
            Assignment::Assigned(worker) if !set.contains(worker) => {
                Some(AuditViolation::UnavailableWorker { day, worker })
            }
            Assignment::Unassigned if !set.is_empty() => Some(AuditViolation::MissingAssignment {
                day,
                available: set.len(),
            }),
            _ => None,
        })
}

fn fairness_violations<'a>(
    problem: &'a RosterProblem,
    assignments: &'a [Assignment],
    loads: &'a [usize],
) -> impl Iterator<Item = AuditViolation> + 'a {
    problem
        .days()
        .iter()
        .zip(assignments)
        .enumerate()
        .filter_map(move |(day, (set, assignment))| {
            let assigned = assignment.worker()?;
            let assigned_load = *loads.get(assigned.index())?;
            Some((day, set, assigned, assigned_load))
        })
        .flat_map(move |(day, set, assigned, assigned_load)| {
            set.iter()
                .filter(move |&alternate| alternate != assigned)
                .filter_map(move |alternate| {
                    let alternate_load = loads[alternate.index()];
                    (alternate_load + 1 < assigned_load).then_some(AuditViolation::UnfairDay {
                        day,
                        assigned,
                        assigned_load,
                        alternate,
                        alternate_load,
                    })
                })
        })
}
