//! Pagination parameter types

use crate::error::{Error, Result};
use mongodb::bson::Document;
use mongodb::options::{Collation, Hint};

/// Page size used when the caller leaves `limit` unset or non-positive
pub const DEFAULT_LIMIT: i64 = 10;

/// Sort/boundary field used when the caller leaves `paginated_field` empty
///
/// `_id` is globally unique and strictly ordered, so it needs no
/// tie-breaker.
pub const DEFAULT_PAGINATED_FIELD: &str = "_id";

/// Parameters for a paginated find
///
/// At most one of `next`/`previous` may be set; supplying both fails
/// validation. `count_total` triggers a full count of documents matching
/// the base query, which is expensive and therefore opt-in.
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    /// Caller's base filter; an empty document means no filter
    pub query: Document,
    /// Field providing the page sort order and cursor boundary
    pub paginated_field: String,
    /// Maximum number of documents per page
    pub limit: i64,
    /// Token for the page following a previous result
    pub next: Option<String>,
    /// Token for the page preceding a previous result
    pub previous: Option<String>,
    /// Whether to count all documents matching the base query
    pub count_total: bool,
    /// Optional collation applied to the find
    pub collation: Option<Collation>,
    /// Optional index hint applied to the find
    pub hint: Option<Hint>,
    /// Optional field projection; `"id"` is rewritten to `"_id"`
    pub projection: Option<Vec<String>>,
}

impl PaginationParams {
    /// Create parameters with the given base query
    pub fn new(query: Document) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }

    /// Set the paginated field
    #[must_use]
    pub fn with_paginated_field(mut self, field: impl Into<String>) -> Self {
        self.paginated_field = field.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the forward page token
    #[must_use]
    pub fn with_next(mut self, token: impl Into<String>) -> Self {
        self.next = Some(token.into());
        self
    }

    /// Set the backward page token
    #[must_use]
    pub fn with_previous(mut self, token: impl Into<String>) -> Self {
        self.previous = Some(token.into());
        self
    }

    /// Request the total matching count alongside the page
    #[must_use]
    pub fn with_count_total(mut self) -> Self {
        self.count_total = true;
        self
    }

    /// Set the collation
    #[must_use]
    pub fn with_collation(mut self, collation: Collation) -> Self {
        self.collation = Some(collation);
        self
    }

    /// Set the index hint
    #[must_use]
    pub fn with_hint(mut self, hint: Hint) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Set the field projection
    #[must_use]
    pub fn with_projection(mut self, fields: Vec<String>) -> Self {
        self.projection = Some(fields);
        self
    }

    /// Fill unset parameters with their defaults
    ///
    /// Empty `paginated_field` becomes `_id`; a non-positive `limit`
    /// becomes [`DEFAULT_LIMIT`]. Pure, no I/O.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.paginated_field.is_empty() {
            self.paginated_field = DEFAULT_PAGINATED_FIELD.to_string();
        }
        if self.limit <= 0 {
            self.limit = DEFAULT_LIMIT;
        }
        self
    }

    /// Reject ambiguous input
    ///
    /// Both `next` and `previous` set at once has no defined direction;
    /// fail fast instead of silently preferring one.
    pub fn validate(&self) -> Result<()> {
        if self.next.is_some() && self.previous.is_some() {
            return Err(Error::invalid_argument(
                "next and previous cursors are mutually exclusive",
            ));
        }
        Ok(())
    }

    /// Whether the paginated field needs the `_id` tie-breaker
    pub fn needs_tie_break(&self) -> bool {
        self.paginated_field != DEFAULT_PAGINATED_FIELD
    }

    /// Whether this request pages backward
    pub fn is_backward(&self) -> bool {
        self.previous.is_some()
    }
}
