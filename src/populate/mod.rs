//! Relation population
//!
//! Builds the aggregation sub-pipeline that inlines referenced documents
//! from other collections: a `$match` on the caller's filter, then one
//! lookup+flatten stage pair per requested relation. Execution lives in
//! [`crate::collection`].

mod pipeline;
mod types;

pub use pipeline::{build_flatten_stage, build_lookup_stage, build_pipeline};
pub use types::{PopulateOptions, ResultMode};

#[cfg(test)]
mod tests;
