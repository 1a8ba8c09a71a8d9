//! Tests for population pipeline construction

use super::*;
use mongodb::bson::doc;
use pretty_assertions::assert_eq;

#[test]
fn test_lookup_stage_shape() {
    let populate = PopulateOptions::new("authors", "authorId")
        .with_projection(vec!["name".to_string()]);
    let stage = build_lookup_stage(&populate);

    assert_eq!(
        stage,
        doc! {
            "$lookup": {
                "from": "authors",
                "let": { "fk": "$authorId" },
                "pipeline": [
                    { "$match": { "$expr": { "$eq": ["$_id", "$$fk"] } } },
                    { "$project": { "name": 1 } },
                ],
                "as": "authorId",
            }
        }
    );
}

#[test]
fn test_lookup_stage_without_projection_omits_project() {
    let stage = build_lookup_stage(&PopulateOptions::new("authors", "authorId"));
    let lookup = stage.get_document("$lookup").unwrap();
    let pipeline = lookup.get_array("pipeline").unwrap();
    assert_eq!(pipeline.len(), 1);
}

#[test]
fn test_lookup_projection_keeps_field_order() {
    let populate = PopulateOptions::new("authors", "authorId")
        .with_projection(vec!["name".to_string(), "email".to_string()]);
    let stage = build_lookup_stage(&populate);
    let lookup = stage.get_document("$lookup").unwrap();
    let pipeline = lookup.get_array("pipeline").unwrap();
    assert_eq!(
        pipeline[1].as_document().unwrap(),
        &doc! { "$project": { "name": 1, "email": 1 } }
    );
}

#[test]
fn test_flatten_stage_shape() {
    let stage = build_flatten_stage(&PopulateOptions::new("authors", "authorId"));
    assert_eq!(
        stage,
        doc! { "$addFields": { "authorId": { "$first": "$authorId" } } }
    );
}

#[test]
fn test_pipeline_starts_with_match() {
    let pipeline = build_pipeline(doc! { "published": true }, &[]);
    assert_eq!(pipeline, vec![doc! { "$match": { "published": true } }]);
}

#[test]
fn test_pipeline_appends_stage_pair_per_relation() {
    let populates = vec![
        PopulateOptions::new("authors", "authorId"),
        PopulateOptions::new("categories", "categoryId"),
    ];
    let pipeline = build_pipeline(doc! {}, &populates);

    assert_eq!(pipeline.len(), 5);
    assert!(pipeline[0].contains_key("$match"));
    assert!(pipeline[1].contains_key("$lookup"));
    assert!(pipeline[2].contains_key("$addFields"));
    assert!(pipeline[3].contains_key("$lookup"));
    assert!(pipeline[4].contains_key("$addFields"));

    // Relations keep caller order.
    let first = pipeline[1].get_document("$lookup").unwrap();
    assert_eq!(first.get_str("from").unwrap(), "authors");
    let second = pipeline[3].get_document("$lookup").unwrap();
    assert_eq!(second.get_str("from").unwrap(), "categories");
}

#[test]
fn test_result_mode() {
    assert!(ResultMode::Single.is_single());
    assert!(!ResultMode::Multiple.is_single());
    assert_eq!(ResultMode::default(), ResultMode::Multiple);
}
