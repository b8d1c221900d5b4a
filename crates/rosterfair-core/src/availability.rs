//! Per-day availability sets.

use std::fmt;

use smallvec::SmallVec;

use crate::worker::WorkerId;

/// The workers eligible for one day.
///
/// Stored sorted and de-duplicated, so membership never depends on the
/// order or multiplicity of the input and iteration is always in ascending
/// [`WorkerId`] order.
///
/// # Example
///
/// ```
/// use rosterfair_core::{AvailabilitySet, WorkerId};
///
/// let set = AvailabilitySet::from_indices([3, 0, 3, 1]);
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(WorkerId(3)));
/// assert_eq!(set.iter().map(WorkerId::index).collect::<Vec<_>>(), vec![0, 1, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<WorkerId>", into = "Vec<WorkerId>"))]
pub struct AvailabilitySet {
    workers: SmallVec<[WorkerId; 8]>,
}

impl AvailabilitySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw worker indices.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        indices.into_iter().map(WorkerId).collect()
    }

    /// Returns true if `worker` is available.
    pub fn contains(&self, worker: WorkerId) -> bool {
        self.workers.binary_search(&worker).is_ok()
    }

    /// Iterates workers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = WorkerId> + '_ {
        self.workers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Returns the largest worker id in the set.
    pub fn max_worker(&self) -> Option<WorkerId> {
        self.workers.last().copied()
    }

    /// Returns the workers as a sorted slice.
    pub fn as_slice(&self) -> &[WorkerId] {
        &self.workers
    }
}

impl FromIterator<WorkerId> for AvailabilitySet {
    fn from_iter<I: IntoIterator<Item = WorkerId>>(iter: I) -> Self {
        let mut workers: SmallVec<[WorkerId; 8]> = iter.into_iter().collect();
        workers.sort_unstable();
        workers.dedup();
        Self { workers }
    }
}

impl From<Vec<WorkerId>> for AvailabilitySet {
    fn from(workers: Vec<WorkerId>) -> Self {
        workers.into_iter().collect()
    }
}

impl From<AvailabilitySet> for Vec<WorkerId> {
    fn from(set: AvailabilitySet) -> Self {
        set.workers.into_vec()
    }
}

impl<'a> IntoIterator for &'a AvailabilitySet {
    type Item = WorkerId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, WorkerId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.workers.iter().copied()
    }
}

impl fmt::Display for AvailabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, worker) in self.workers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{worker}")?;
        }
        f.write_str("}")
    }
}
