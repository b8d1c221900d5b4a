//! Fixed scenarios and named randomized cases.
//!
//! # Example
//!
//! ```
//! use rosterfair_test::fixtures;
//!
//! let problem = fixtures::all_available_permuted();
//! assert_eq!(problem.worker_count(), 5);
//! assert_eq!(problem.day_count(), 20);
//! ```

use rand::Rng;
use rosterfair_core::{AvailabilitySet, RosterProblem};

use crate::generators;

/// Availability of the 5 worker, 20 day case, each day listing everyone in
/// a different order.
pub const PERMUTED_DAYS: [[usize; 5]; 20] = [
    [3, 0, 2, 1, 4],
    [3, 4, 2, 0, 1],
    [1, 2, 0, 3, 4],
    [2, 0, 4, 3, 1],
    [3, 4, 2, 0, 1],
    [1, 2, 3, 0, 4],
    [2, 0, 4, 1, 3],
    [2, 0, 3, 1, 4],
    [2, 1, 4, 3, 0],
    [0, 3, 4, 2, 1],
    [0, 3, 1, 4, 2],
    [1, 3, 2, 0, 4],
    [2, 4, 3, 1, 0],
    [1, 4, 3, 0, 2],
    [4, 0, 2, 1, 3],
    [4, 0, 2, 3, 1],
    [3, 1, 2, 4, 0],
    [4, 1, 3, 2, 0],
    [0, 4, 2, 1, 3],
    [1, 2, 0, 3, 4],
];

/// A named problem instance.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub problem: RosterProblem,
}

impl Scenario {
    fn new(name: &'static str, worker_count: usize, days: Vec<AvailabilitySet>) -> Self {
        Self {
            name,
            problem: build(worker_count, days),
        }
    }
}

fn build(worker_count: usize, days: Vec<AvailabilitySet>) -> RosterProblem {
    match RosterProblem::new(worker_count, days) {
        Ok(problem) => problem,
        Err(err) => panic!("invalid fixture: {err}"),
    }
}

/// One worker, one day, available.
pub fn single_day() -> RosterProblem {
    build(1, vec![AvailabilitySet::from_indices([0])])
}

/// Ten workers, nine days, nobody available.
pub fn no_availability() -> RosterProblem {
    build(10, vec![AvailabilitySet::new(); 9])
}

/// Five workers, twenty days, everyone available every day.
pub fn all_available_permuted() -> RosterProblem {
    let days = PERMUTED_DAYS
        .iter()
        .map(|day| AvailabilitySet::from_indices(day.iter().copied()))
        .collect();
    build(5, days)
}

/// Three workers over ten days: worker 0 every day, worker 1 only on days
/// 0 and 1, worker 2 only on days 2 and 3.
pub fn sparse_pair() -> RosterProblem {
    let days = (0..10)
        .map(|day| match day {
            0 | 1 => AvailabilitySet::from_indices([0, 1]),
            2 | 3 => AvailabilitySet::from_indices([0, 2]),
            _ => AvailabilitySet::from_indices([0]),
        })
        .collect();
    build(3, days)
}

/// The deterministic scenarios.
pub fn fixed_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "01 person, 01 day, all available",
            problem: single_day(),
        },
        Scenario {
            name: "10 people, 09 days, no availability",
            problem: no_availability(),
        },
        Scenario {
            name: "05 people, 20 days, all available",
            problem: all_available_permuted(),
        },
        Scenario {
            name: "03 people, 10 days, two sparse workers",
            problem: sparse_pair(),
        },
    ]
}

/// The randomized scenarios, drawn from `rng`.
pub fn random_scenarios<R: Rng>(rng: &mut R) -> Vec<Scenario> {
    let (_, off_sync) = generators::one_worker_off_sync(rng, 7, 50, 17, 0.3);
    vec![
        Scenario::new(
            "05 people, 20 days, .7 availability",
            5,
            generators::uniform_availability(rng, 5, 20, 0.7),
        ),
        Scenario::new(
            "03 people, 31 days, .2 availability",
            3,
            generators::uniform_availability(rng, 3, 31, 0.2),
        ),
        Scenario::new(
            "06 people, 27 days, one person very available",
            6,
            generators::availability_by_probability(rng, 27, &[0.3, 0.3, 0.9, 0.3, 0.3, 0.3]),
        ),
        Scenario::new(
            "04 people, 34 days, one person very unavailable",
            4,
            generators::availability_by_probability(rng, 34, &[0.4, 0.4, 0.05, 0.4]),
        ),
        Scenario::new("07 people, 50 days, one person off sync", 7, off_sync),
    ]
}
