//! Range-filter and sort-specification builder

use crate::cursor;
use crate::error::{Error, Result};
use crate::params::PaginationParams;
use mongodb::bson::{doc, Document};

/// Build the filter clauses and sort specification for one page fetch
///
/// The clause list starts with the caller's base query and, when a page
/// token is present, gains a range clause placing the fetch strictly
/// after (forward) or before (backward) the boundary. The sort document
/// matches: ascending for forward pages, descending for backward pages
/// (the engine restores ascending order after trimming), always with
/// `_id` as secondary key when the paginated field is not `_id`.
pub fn build_queries(params: &PaginationParams) -> Result<(Vec<Document>, Document)> {
    let mut clauses = vec![params.query.clone()];

    let field = params.paginated_field.as_str();
    let comparison = if params.is_backward() { "$lt" } else { "$gt" };
    let direction = if params.is_backward() { -1 } else { 1 };

    let token = params.previous.as_deref().or(params.next.as_deref());
    if let Some(token) = token {
        clauses.push(range_clause(params, field, comparison, token)?);
    }

    let sort = if params.needs_tie_break() {
        doc! { field: direction, "_id": direction }
    } else {
        doc! { "_id": direction }
    };

    Ok((clauses, sort))
}

/// Build the strict range clause for a decoded boundary token
///
/// On a non-unique paginated field the clause is
/// `{field op v} OR {field == v AND _id op tie}`, a strict total order
/// even when documents share the boundary value. A token whose arity
/// does not match the paginated field is malformed.
fn range_clause(
    params: &PaginationParams,
    field: &str,
    comparison: &str,
    token: &str,
) -> Result<Document> {
    let (value, tie) = cursor::decode(token)?;

    match (params.needs_tie_break(), tie) {
        (false, None) => Ok(doc! { field: { comparison: value } }),
        (true, Some(tie)) => {
            let beyond = doc! { field: { comparison: value.clone() } };
            let tied = doc! { field: value, "_id": { comparison: tie } };
            Ok(doc! { "$or": [beyond, tied] })
        }
        (false, Some(_)) => Err(Error::malformed_cursor(
            "token carries a tie-breaker while paginating on _id",
        )),
        (true, None) => Err(Error::malformed_cursor(format!(
            "token is missing the _id tie-breaker for field '{field}'"
        ))),
    }
}
