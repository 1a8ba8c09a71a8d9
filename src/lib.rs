//! # mongopage
//!
//! Cursor-based pagination and relation population for MongoDB
//! collections.
//!
//! ## Features
//!
//! - **Stable cursor pagination**: opaque, URL-safe page tokens with
//!   over-fetch has-more detection and forward/backward symmetry
//! - **Tie-breaking**: a secondary `_id` sort key keeps the page order
//!   total even when the paginated field has duplicate values
//! - **Relation population**: one-level `$lookup` joins inlined into the
//!   result documents, with optional field projection
//! - **Timeout budgets**: every store call is bounded by an injected,
//!   per-operation budget
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mongopage::{PagedCollection, PaginationParams, Result};
//! use mongodb::bson::doc;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Post {
//!     title: String,
//!     score: i32,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//!     let posts = PagedCollection::new(client.database("blog").collection("posts"));
//!
//!     let params = PaginationParams::new(doc! { "published": true })
//!         .with_paginated_field("score")
//!         .with_limit(20);
//!
//!     let mut results: Vec<Post> = Vec::new();
//!     let page = posts.find_paginated(params, &mut results).await?;
//!
//!     if let Some(next) = page.next {
//!         // Hand `next` to the caller; the follow-up request passes it
//!         // back via `with_next` to fetch the following page.
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     PagedCollection                      │
//! │  find_paginated() → Page     find_and_populate() → docs  │
//! └──────────────────────────────────────────────────────────┘
//!                │                              │
//! ┌──────────┬───┴──────┬───────────┐  ┌────────┴───────────┐
//! │  params  │  query   │   page    │  │     populate       │
//! ├──────────┼──────────┼───────────┤  ├────────────────────┤
//! │ defaults │ range    │ over-fetch│  │ $match             │
//! │ validate │ clauses  │ trim      │  │ $lookup per path   │
//! │          │ sort     │ reverse   │  │ $addFields flatten │
//! └──────────┴──────────┴───────────┘  └────────────────────┘
//!                │
//!          ┌─────┴─────┐
//!          │  cursor   │  opaque boundary tokens
//!          └───────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Timeout configuration
pub mod config;

/// Cursor token codec
pub mod cursor;

/// Pagination parameters and normalization
pub mod params;

/// Query and sort construction
pub mod query;

/// Page descriptor and assembly
pub mod page;

/// Relation population pipeline
pub mod populate;

/// Store-facing collection surface
pub mod collection;

// ============================================================================
// Re-exports
// ============================================================================

pub use collection::PagedCollection;
pub use config::Timeouts;
pub use error::{Error, Result};
pub use page::Page;
pub use params::{PaginationParams, DEFAULT_LIMIT, DEFAULT_PAGINATED_FIELD};
pub use populate::{PopulateOptions, ResultMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
