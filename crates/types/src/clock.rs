//! Logical time for causal ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical clock value, assigned at delivery time.
///
/// Purely a causal-ordering counter, not wall-clock time. A run's clock
/// starts at [`LogicalTime::START`] and advances by exactly one per
/// resolved action, never on enqueue.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LogicalTime(pub u64);

impl LogicalTime {
    /// Clock value before any action has resolved.
    pub const START: Self = LogicalTime(0);

    /// Get the next clock value.
    pub fn next(self) -> Self {
        LogicalTime(self.0 + 1)
    }

    /// Get the raw value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LogicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
