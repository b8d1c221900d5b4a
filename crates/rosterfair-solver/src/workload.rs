//! Incremental per-worker workload counts.

use rosterfair_core::{audit, Assignment, WorkerId};

/// Count of days currently assigned to each worker.
///
/// Both phases mutate the tracker in place as they place or move days, so
/// it never needs a rescan of the assignment sequence. [`rescan`] exists
/// for seeding from an external assignment and for self-checks.
///
/// [`rescan`]: WorkloadTracker::rescan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadTracker {
    loads: Vec<usize>,
}

impl WorkloadTracker {
    /// Creates a tracker with every worker at zero.
    pub fn new(worker_count: usize) -> Self {
        Self {
            loads: vec![0; worker_count],
        }
    }

    /// Rebuilds the counts from an assignment sequence.
    pub fn rescan(worker_count: usize, assignments: &[Assignment]) -> Self {
        Self {
            loads: audit::workloads(worker_count, assignments),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.loads.len()
    }

    #[inline]
    pub fn load(&self, worker: WorkerId) -> usize {
        self.loads[worker.index()]
    }

    /// Adds one day to `worker`.
    #[inline]
    pub fn assign(&mut self, worker: WorkerId) {
        self.loads[worker.index()] += 1;
    }

    /// Removes one day from `worker`.
    ///
    /// # Panics
    /// Panics if `worker` has no days.
    #[inline]
    pub fn release(&mut self, worker: WorkerId) {
        let load = &mut self.loads[worker.index()];
        assert!(*load > 0, "released a day from idle worker {worker}");
        *load -= 1;
    }

    /// Moves one day from `from` to `to`.
    #[inline]
    pub fn transfer(&mut self, from: WorkerId, to: WorkerId) {
        self.release(from);
        self.assign(to);
    }

    /// Returns the least loaded candidate, preferring the first one seen
    /// on ties.
    ///
    /// Fed from an [`AvailabilitySet`](rosterfair_core::AvailabilitySet),
    /// which iterates in ascending id order, ties go to the smallest id.
    pub fn least_loaded(&self, candidates: impl IntoIterator<Item = WorkerId>) -> Option<WorkerId> {
        candidates.into_iter().min_by_key(|&worker| self.load(worker))
    }

    /// Sum of squared workloads.
    pub fn potential(&self) -> u64 {
        self.loads.iter().map(|&load| (load as u64) * (load as u64)).sum()
    }

    /// Largest minus smallest workload over all workers, 0 without workers.
    pub fn spread(&self) -> usize {
        match (self.loads.iter().max(), self.loads.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    /// Total assigned days.
    pub fn total(&self) -> usize {
        self.loads.iter().sum()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.loads
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.loads
    }
}
