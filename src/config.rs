//! Timeout configuration for store operations
//!
//! Every store call runs under a budget from this config. Budgets are
//! injected at collection construction rather than read from globals so
//! tests can shrink them freely.

use std::time::Duration;

/// Per-operation timeout budgets
///
/// - `short` bounds single-document lookups
/// - `medium` bounds plain multi-document finds
/// - `long` bounds scans, counts, and aggregations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Budget for single-document lookups
    pub short: Duration,
    /// Budget for plain finds
    pub medium: Duration,
    /// Budget for scans, counts, and aggregations
    pub long: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            short: Duration::from_secs(5),
            medium: Duration::from_secs(15),
            long: Duration::from_secs(30),
        }
    }
}

impl Timeouts {
    /// Create a new timeout config
    pub fn new(short: Duration, medium: Duration, long: Duration) -> Self {
        Self {
            short,
            medium,
            long,
        }
    }

    /// Set the short budget
    #[must_use]
    pub fn with_short(mut self, short: Duration) -> Self {
        self.short = short;
        self
    }

    /// Set the medium budget
    #[must_use]
    pub fn with_medium(mut self, medium: Duration) -> Self {
        self.medium = medium;
        self
    }

    /// Set the long budget
    #[must_use]
    pub fn with_long(mut self, long: Duration) -> Self {
        self.long = long;
        self
    }
}
