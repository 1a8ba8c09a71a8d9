//! Over-fetch trimming, reversal, and boundary token generation

use crate::cursor;
use crate::error::{Error, Result};
use crate::page::Page;
use crate::params::PaginationParams;
use mongodb::bson::Document;

/// Assemble a [`Page`] from an over-fetched result set
///
/// `docs` is the raw fetch of `limit + 1` documents in store order:
/// ascending for forward pages, descending for backward ones. The
/// returned documents are trimmed to `limit` and always in ascending,
/// caller-facing order. `params` must already be normalized.
pub(crate) fn assemble_page(
    mut docs: Vec<Document>,
    params: &PaginationParams,
    count: Option<u64>,
) -> Result<(Vec<Document>, Page)> {
    let limit = params.limit as usize;

    // The extra sentinel element only signals that another page exists.
    let has_more = docs.len() > limit;
    if has_more {
        docs.truncate(limit);
    }

    // Arriving via a next token implies a previous page by construction;
    // arriving via a previous token implies a following page. The
    // over-fetch covers the remaining case in each direction.
    let has_previous = params.next.is_some() || (params.previous.is_some() && has_more);
    let has_next = params.previous.is_some() || has_more;

    // A backward page was fetched descending; restore ascending order.
    if params.is_backward() {
        docs.reverse();
    }

    let mut previous = None;
    let mut next = None;
    if let (Some(first), Some(last)) = (docs.first(), docs.last()) {
        if has_previous {
            previous = Some(boundary_token(first, params, "previous")?);
        }
        if has_next {
            next = Some(boundary_token(last, params, "next")?);
        }
    }

    let page = Page {
        previous,
        has_previous,
        next,
        has_next,
        count,
    };

    Ok((docs, page))
}

/// Encode a boundary token from one edge document of the trimmed page
fn boundary_token(doc: &Document, params: &PaginationParams, boundary: &str) -> Result<String> {
    let value = doc.get(&params.paginated_field).ok_or_else(|| {
        Error::cursor_generation(
            boundary,
            format!(
                "result document is missing paginated field '{}'",
                params.paginated_field
            ),
        )
    })?;

    let tie = if params.needs_tie_break() {
        let id = doc
            .get("_id")
            .ok_or_else(|| Error::cursor_generation(boundary, "result document is missing _id"))?;
        Some(id)
    } else {
        None
    };

    cursor::encode(value, tie).map_err(|e| Error::cursor_generation(boundary, e.to_string()))
}
