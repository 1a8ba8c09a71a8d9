//! Aggregation stage construction for relation population

use crate::populate::PopulateOptions;
use mongodb::bson::{doc, Document};

/// Build the full population pipeline: match stage, then a lookup and
/// flatten stage pair per relation, in caller order
pub fn build_pipeline(filter: Document, populates: &[PopulateOptions]) -> Vec<Document> {
    let mut pipeline = vec![doc! { "$match": filter }];
    for populate in populates {
        pipeline.push(build_lookup_stage(populate));
        pipeline.push(build_flatten_stage(populate));
    }
    pipeline
}

/// Build the `$lookup` stage for one relation
///
/// A correlated sub-pipeline join against `on`: the local value at
/// `path` is bound to a variable and matched against the foreign `_id`
/// with `$eq`, whose array-aware semantics handle both a single
/// reference and an array of references. Joined documents land in an
/// array at `path`.
pub fn build_lookup_stage(populate: &PopulateOptions) -> Document {
    let mut sub_pipeline = vec![doc! {
        "$match": { "$expr": { "$eq": ["$_id", "$$fk"] } }
    }];

    // An empty $project is rejected by the server, so only emit one
    // when fields were requested.
    if !populate.projection.is_empty() {
        let mut projection = Document::new();
        for field in &populate.projection {
            projection.insert(field, 1);
        }
        sub_pipeline.push(doc! { "$project": projection });
    }

    doc! {
        "$lookup": {
            "from": &populate.on,
            "let": { "fk": format!("${}", populate.path) },
            "pipeline": sub_pipeline,
            "as": &populate.path,
        }
    }
}

/// Build the `$addFields` stage collapsing the joined array at `path`
/// back to a scalar
///
/// A to-one relation comes back from `$lookup` as a one-element array;
/// `$first` restores the scalar shape. On a genuine to-many relation
/// only the first match survives.
pub fn build_flatten_stage(populate: &PopulateOptions) -> Document {
    let path = populate.path.as_str();
    doc! {
        "$addFields": { path: { "$first": format!("${path}") } }
    }
}
