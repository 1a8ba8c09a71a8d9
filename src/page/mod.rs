//! Page descriptor and assembly
//!
//! The pure half of the pagination engine: given the over-fetched result
//! set, compute has-more, trim the sentinel, restore presentation order,
//! and generate the boundary tokens. The store-facing half lives in
//! [`crate::collection`].

mod assemble;
mod types;

pub(crate) use assemble::assemble_page;
pub use types::Page;
