//! Store-facing collection surface
//!
//! [`PagedCollection`] wraps a driver collection and carries the timeout
//! budgets. Every store operation runs under its budget and surfaces a
//! timeout as [`Error::Timeout`]; driver errors propagate unchanged and
//! are never retried here.

use crate::config::Timeouts;
use crate::error::{Error, Result};
use crate::page::{assemble_page, Page};
use crate::params::PaginationParams;
use crate::populate::{build_pipeline, PopulateOptions, ResultMode};
use crate::query::build_queries;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, from_document, Document};
use mongodb::options::FindOptions;
use serde::de::DeserializeOwned;
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// A MongoDB collection with cursor pagination and relation population
#[derive(Debug, Clone)]
pub struct PagedCollection {
    collection: mongodb::Collection<Document>,
    timeouts: Timeouts,
}

impl PagedCollection {
    /// Wrap a driver collection with default timeout budgets
    pub fn new(collection: mongodb::Collection<Document>) -> Self {
        Self {
            collection,
            timeouts: Timeouts::default(),
        }
    }

    /// Override the timeout budgets
    #[must_use]
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Name of the underlying collection
    pub fn name(&self) -> &str {
        self.collection.name()
    }

    // ============================================================================
    // Single-document lookups
    // ============================================================================

    /// Fetch the first document matching `filter`
    ///
    /// Fails with [`Error::NotFound`] when nothing matches.
    pub async fn find_one<T: DeserializeOwned>(&self, filter: Document) -> Result<T> {
        debug!("find_one on '{}'", self.collection.name());
        let found = bounded(
            "find_one",
            self.timeouts.short,
            self.collection.find_one(filter),
        )
        .await?;
        let doc = found.ok_or(Error::NotFound)?;
        Ok(from_document(doc)?)
    }

    /// Fetch the document whose `_id` matches the given hex string
    pub async fn find_by_id<T: DeserializeOwned>(&self, id: &str) -> Result<T> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|e| Error::invalid_argument(format!("invalid ObjectId '{id}': {e}")))?;
        self.find_by_object_id(object_id).await
    }

    /// Fetch the document whose `_id` matches the given ObjectId
    pub async fn find_by_object_id<T: DeserializeOwned>(&self, id: ObjectId) -> Result<T> {
        self.find_one(doc! { "_id": id }).await
    }

    // ============================================================================
    // Plain finds
    // ============================================================================

    /// Fetch every document matching `filter`
    pub async fn find<T: DeserializeOwned>(&self, filter: Document) -> Result<Vec<T>> {
        debug!("find on '{}'", self.collection.name());
        let cursor = bounded("find", self.timeouts.medium, self.collection.find(filter)).await?;
        let docs = bounded(
            "find",
            self.timeouts.medium,
            cursor.try_collect::<Vec<Document>>(),
        )
        .await?;
        decode_all(docs)
    }

    /// Fetch every document matching `filter` with explicit find options
    pub async fn find_with_options<T: DeserializeOwned>(
        &self,
        filter: Document,
        options: FindOptions,
    ) -> Result<Vec<T>> {
        debug!("find with options on '{}'", self.collection.name());
        let cursor = bounded(
            "find",
            self.timeouts.medium,
            self.collection.find(filter).with_options(options),
        )
        .await?;
        let docs = bounded(
            "find",
            self.timeouts.medium,
            cursor.try_collect::<Vec<Document>>(),
        )
        .await?;
        decode_all(docs)
    }

    /// Count every document matching `filter`
    ///
    /// A full count is expensive on large collections; pagination only
    /// issues it when the caller opts in.
    pub async fn count_documents(&self, filter: Document) -> Result<u64> {
        debug!("count_documents on '{}'", self.collection.name());
        bounded(
            "count_documents",
            self.timeouts.long,
            self.collection.count_documents(filter),
        )
        .await
    }

    // ============================================================================
    // Cursor pagination
    // ============================================================================

    /// Fetch one page of documents and its navigation descriptor
    ///
    /// The trimmed page is written into `results` (cleared first) in
    /// ascending presentation order. A count error aborts before the
    /// find executes; a cursor generation error aborts after it, and no
    /// partial page is ever returned.
    pub async fn find_paginated<T: DeserializeOwned>(
        &self,
        params: PaginationParams,
        results: &mut Vec<T>,
    ) -> Result<Page> {
        params.validate()?;
        let params = params.normalized();

        // Total across all pages, on the base query only — the range
        // clause must not narrow it.
        let count = if params.count_total {
            Some(self.count_documents(params.query.clone()).await?)
        } else {
            None
        };

        let (clauses, sort) = build_queries(&params)?;
        let fetched = self.execute_cursor_query(&params, clauses, sort).await?;
        let (docs, page) = assemble_page(fetched, &params, count)?;

        results.clear();
        results.reserve(docs.len());
        for doc in docs {
            results.push(from_document(doc)?);
        }
        Ok(page)
    }

    /// Run the over-fetch query with sort, collation, hint, and
    /// projection applied
    async fn execute_cursor_query(
        &self,
        params: &PaginationParams,
        clauses: Vec<Document>,
        sort: Document,
    ) -> Result<Vec<Document>> {
        debug!(
            "paginated find on '{}' (field '{}', limit {})",
            self.collection.name(),
            params.paginated_field,
            params.limit
        );

        let mut find = self
            .collection
            .find(doc! { "$and": clauses })
            .sort(sort)
            .limit(params.limit + 1);
        if let Some(collation) = params.collation.clone() {
            find = find.collation(collation);
        }
        if let Some(hint) = params.hint.clone() {
            find = find.hint(hint);
        }
        if let Some(projection) = projection_document(params) {
            find = find.projection(projection);
        }

        let cursor = bounded("paginated find", self.timeouts.long, find).await?;
        bounded(
            "paginated find",
            self.timeouts.long,
            cursor.try_collect::<Vec<Document>>(),
        )
        .await
    }

    // ============================================================================
    // Relation population
    // ============================================================================

    /// Fetch documents matching `filter` with the requested relations
    /// inlined
    ///
    /// [`ResultMode::Single`] decodes at most the first matching
    /// document; [`ResultMode::Multiple`] decodes all of them.
    pub async fn find_populated<T: DeserializeOwned>(
        &self,
        filter: Document,
        populates: &[PopulateOptions],
        mode: ResultMode,
    ) -> Result<Vec<T>> {
        debug!(
            "populated find on '{}' ({} relations)",
            self.collection.name(),
            populates.len()
        );
        let pipeline = build_pipeline(filter, populates);
        let mut cursor = bounded(
            "aggregate",
            self.timeouts.long,
            self.collection.aggregate(pipeline),
        )
        .await?;

        if mode.is_single() {
            let doc = bounded("aggregate", self.timeouts.long, cursor.try_next()).await?;
            return match doc {
                Some(doc) => Ok(vec![from_document(doc)?]),
                None => Ok(Vec::new()),
            };
        }

        let docs = bounded(
            "aggregate",
            self.timeouts.long,
            cursor.try_collect::<Vec<Document>>(),
        )
        .await?;
        decode_all(docs)
    }

    /// Fetch every matching document with relations inlined
    pub async fn find_and_populate<T: DeserializeOwned>(
        &self,
        filter: Document,
        populates: &[PopulateOptions],
    ) -> Result<Vec<T>> {
        self.find_populated(filter, populates, ResultMode::Multiple)
            .await
    }

    /// Fetch the first matching document with relations inlined
    ///
    /// Fails with [`Error::NotFound`] when nothing matches.
    pub async fn find_one_and_populate<T: DeserializeOwned>(
        &self,
        filter: Document,
        populates: &[PopulateOptions],
    ) -> Result<T> {
        let mut docs = self
            .find_populated(filter, populates, ResultMode::Single)
            .await?;
        docs.pop().ok_or(Error::NotFound)
    }
}

/// Run a store operation under its timeout budget
async fn bounded<F, T>(operation: &str, budget: Duration, future: F) -> Result<T>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match timeout(budget, future).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(Error::timeout(operation, budget.as_millis() as u64)),
    }
}

/// Decode a batch of raw documents into the caller's type
fn decode_all<T: DeserializeOwned>(docs: Vec<Document>) -> Result<Vec<T>> {
    docs.into_iter()
        .map(|doc| Ok(from_document(doc)?))
        .collect()
}

/// Build the projection document, rewriting the caller-facing `id`
/// field to its storage name
fn projection_document(params: &PaginationParams) -> Option<Document> {
    params.projection.as_ref().map(|fields| {
        let mut projection = Document::new();
        for field in fields {
            let field = if field == "id" { "_id" } else { field.as_str() };
            projection.insert(field, 1);
        }
        projection
    })
}
