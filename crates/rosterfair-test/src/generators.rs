//! Randomized availability generators.
//!
//! Each generator draws from the RNG it is given and returns one
//! [`AvailabilitySet`] per day, ready for
//! [`RosterProblem::new`](rosterfair_core::RosterProblem::new).

use rand::Rng;
use rosterfair_core::{AvailabilitySet, WorkerId};

/// Every worker is available on every day with the same probability.
pub fn uniform_availability<R: Rng>(
    rng: &mut R,
    worker_count: usize,
    day_count: usize,
    probability: f64,
) -> Vec<AvailabilitySet> {
    let probabilities = vec![probability; worker_count];
    availability_by_probability(rng, day_count, &probabilities)
}

/// Worker `w` is available on each day with probability `probabilities[w]`.
///
/// The worker count is `probabilities.len()`.
pub fn availability_by_probability<R: Rng>(
    rng: &mut R,
    day_count: usize,
    probabilities: &[f64],
) -> Vec<AvailabilitySet> {
    (0..day_count)
        .map(|_| -> AvailabilitySet {
            probabilities
                .iter()
                .enumerate()
                .filter(|&(_, &p)| rng.random::<f64>() < p)
                .map(|(w, _)| WorkerId(w))
                .collect()
        })
        .collect()
}

/// One randomly chosen worker covers the first `days_off_sync` days alone
/// and then drops out; every other worker is available afterwards with
/// `probability`.
///
/// Returns the chosen worker with the days, `None` without workers.
pub fn one_worker_off_sync<R: Rng>(
    rng: &mut R,
    worker_count: usize,
    day_count: usize,
    days_off_sync: usize,
    probability: f64,
) -> (Option<WorkerId>, Vec<AvailabilitySet>) {
    if worker_count == 0 {
        return (None, vec![AvailabilitySet::new(); day_count]);
    }

    let off_sync = WorkerId(rng.random_range(0..worker_count));
    let days: Vec<AvailabilitySet> = (0..day_count)
        .map(|day| -> AvailabilitySet {
            if day < days_off_sync {
                std::iter::once(off_sync).collect()
            } else {
                (0..worker_count)
                    .map(WorkerId)
                    .filter(|&w| w != off_sync && rng.random::<f64>() < probability)
                    .collect()
            }
        })
        .collect();
    (Some(off_sync), days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;

    #[test]
    fn test_uniform_shape() {
        let mut rng = seeded_rng(1);
        let days = uniform_availability(&mut rng, 4, 30, 0.5);
        assert_eq!(days.len(), 30);
        assert!(days
            .iter()
            .all(|d| d.max_worker().map_or(true, |w| w.index() < 4)));
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = seeded_rng(2);
        let days = availability_by_probability(&mut rng, 10, &[1.0, 0.0, 1.0]);
        for day in &days {
            assert_eq!(day, &AvailabilitySet::from_indices([0, 2]));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = uniform_availability(&mut seeded_rng(9), 6, 25, 0.4);
        let b = uniform_availability(&mut seeded_rng(9), 6, 25, 0.4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_off_sync_layout() {
        let mut rng = seeded_rng(3);
        let (worker, days) = one_worker_off_sync(&mut rng, 7, 50, 17, 1.0);
        let worker = worker.unwrap();

        for day in &days[..17] {
            assert_eq!(day.as_slice(), &[worker]);
        }
        for day in &days[17..] {
            assert_eq!(day.len(), 6);
            assert!(!day.contains(worker));
        }
    }

    #[test]
    fn test_off_sync_without_workers() {
        let mut rng = seeded_rng(4);
        let (worker, days) = one_worker_off_sync(&mut rng, 0, 5, 2, 0.5);
        assert_eq!(worker, None);
        assert!(days.iter().all(AvailabilitySet::is_empty));
    }
}
