//! Query and sort construction
//!
//! Turns pagination parameters into the conjunctive filter-clause list and
//! sort document handed to the store. Does not execute anything.

mod builder;

pub use builder::build_queries;
