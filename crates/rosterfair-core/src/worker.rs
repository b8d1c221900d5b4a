//! Worker and day identities.

use std::fmt;

/// Position of a day in the planning horizon, `0..day_count`.
pub type DayIndex = usize;

/// Identity of a worker, `0..worker_count`.
///
/// Workers carry no attributes beyond their index. Ordering follows the
/// index; every tie in the solver is broken towards the smaller id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorkerId(pub usize);

impl WorkerId {
    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for WorkerId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<WorkerId> for usize {
    fn from(worker: WorkerId) -> Self {
        worker.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}
