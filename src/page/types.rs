//! Page descriptor type

use serde::{Deserialize, Serialize};

/// Navigation descriptor for one returned page
///
/// Constructed fresh per call and never mutated after return. `count`
/// is only populated when the caller opted into the total count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Token for the page preceding this one
    pub previous: Option<String>,
    /// Whether a preceding page exists
    pub has_previous: bool,
    /// Token for the page following this one
    pub next: Option<String>,
    /// Whether a following page exists
    pub has_next: bool,
    /// Total documents matching the base query, when requested
    pub count: Option<u64>,
}
