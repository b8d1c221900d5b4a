//! Validated allocation input.

use crate::availability::AvailabilitySet;
use crate::error::{Result, RosterError};
use crate::worker::{DayIndex, WorkerId};

/// A roster allocation problem: `worker_count` workers and one
/// availability set per day.
///
/// Only constructible through the checked constructors, so every worker id
/// in every day is known to lie in `0..worker_count`.
///
/// # Example
///
/// ```
/// use rosterfair_core::RosterProblem;
///
/// let problem = RosterProblem::from_indices(2, &[vec![0, 1], vec![], vec![1]]).unwrap();
/// assert_eq!(problem.day_count(), 3);
/// assert_eq!(problem.empty_day_count(), 1);
///
/// let err = RosterProblem::from_indices(2, &[vec![2]]).unwrap_err();
/// assert!(err.is_invalid_argument());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RosterProblem {
    worker_count: usize,
    days: Vec<AvailabilitySet>,
}

impl RosterProblem {
    /// Creates a problem, rejecting any out-of-range worker.
    pub fn new(worker_count: usize, days: Vec<AvailabilitySet>) -> Result<Self> {
        for (day, set) in days.iter().enumerate() {
            if let Some(worker) = set.max_worker() {
                if worker.index() >= worker_count {
                    return Err(RosterError::WorkerOutOfRange {
                        day,
                        worker: i64::try_from(worker.index()).unwrap_or(i64::MAX),
                        worker_count,
                    });
                }
            }
        }
        Ok(Self { worker_count, days })
    }

    /// Creates a problem from raw per-day worker index lists.
    ///
    /// Duplicate entries within a day count once.
    pub fn from_indices<D: AsRef<[usize]>>(worker_count: usize, days: &[D]) -> Result<Self> {
        let days = days
            .iter()
            .map(|day| AvailabilitySet::from_indices(day.as_ref().iter().copied()))
            .collect();
        Self::new(worker_count, days)
    }

    /// Creates a problem from signed integers, as received from loosely
    /// typed callers.
    ///
    /// Rejects a negative worker count and any negative or too large worker.
    pub fn from_signed<D: AsRef<[i64]>>(worker_count: i64, days: &[D]) -> Result<Self> {
        let count = usize::try_from(worker_count)
            .map_err(|_| RosterError::NegativeWorkerCount { worker_count })?;

        let mut sets = Vec::with_capacity(days.len());
        for (day, raw) in days.iter().enumerate() {
            let mut workers = Vec::with_capacity(raw.as_ref().len());
            for &worker in raw.as_ref() {
                match usize::try_from(worker) {
                    Ok(index) if index < count => workers.push(WorkerId(index)),
                    _ => {
                        return Err(RosterError::WorkerOutOfRange {
                            day,
                            worker,
                            worker_count: count,
                        })
                    }
                }
            }
            sets.push(AvailabilitySet::from(workers));
        }
        Ok(Self {
            worker_count: count,
            days: sets,
        })
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Returns the availability for `day`.
    ///
    /// # Panics
    /// Panics if `day >= day_count()`.
    pub fn availability(&self, day: DayIndex) -> &AvailabilitySet {
        &self.days[day]
    }

    /// Returns all availability sets in day order.
    pub fn days(&self) -> &[AvailabilitySet] {
        &self.days
    }

    /// Iterates all workers `0..worker_count`.
    pub fn workers(&self) -> impl Iterator<Item = WorkerId> {
        (0..self.worker_count).map(WorkerId)
    }

    /// Number of days nobody is available for.
    pub fn empty_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_empty()).count()
    }
}
