//! Pagination parameters
//!
//! Caller-facing parameter struct plus normalization and validation.
//! Normalization fills unset values with defaults; validation rejects the
//! ambiguous dual-direction input where both page tokens are supplied.

mod types;

pub use types::{PaginationParams, DEFAULT_LIMIT, DEFAULT_PAGINATED_FIELD};
