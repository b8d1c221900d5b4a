//! Per-day assignment.

use std::fmt;

use crate::worker::WorkerId;

/// The worker chosen for one day, or the explicit unassigned sentinel.
///
/// `Unassigned` is only produced for days whose availability set is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Assignment {
    /// The day is covered by this worker.
    Assigned(WorkerId),
    /// Nobody was available.
    #[default]
    Unassigned,
}

impl Assignment {
    /// Returns the assigned worker, if any.
    #[inline]
    pub fn worker(self) -> Option<WorkerId> {
        match self {
            Self::Assigned(worker) => Some(worker),
            Self::Unassigned => None,
        }
    }

    #[inline]
    pub fn is_assigned(self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

impl From<WorkerId> for Assignment {
    fn from(worker: WorkerId) -> Self {
        Self::Assigned(worker)
    }
}

impl From<Option<WorkerId>> for Assignment {
    fn from(worker: Option<WorkerId>) -> Self {
        worker.map_or(Self::Unassigned, Self::Assigned)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(worker) => write!(f, "{worker}"),
            Self::Unassigned => f.write_str("-"),
        }
    }
}
