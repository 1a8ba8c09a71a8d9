//! Integration tests over the public surface
//!
//! Exercises the pure pipeline a caller composes: parameters → query
//! construction → cursor tokens, plus the population stage builders.
//! Store-backed behavior is covered by the in-crate engine tests against
//! an in-memory store model.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, from_document, to_document, Bson};
use mongopage::{
    cursor, populate, query, Page, PaginationParams, PopulateOptions, DEFAULT_LIMIT,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Cursor Token Round Trips
// ============================================================================

#[test]
fn test_cursor_tokens_survive_a_full_round_trip() {
    let oid = ObjectId::new();
    let token = cursor::encode(&Bson::String("2024-06-01".into()), Some(&Bson::ObjectId(oid)))
        .unwrap();

    // Tokens are URL-safe and opaque.
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

    let (value, tie) = cursor::decode(&token).unwrap();
    assert_eq!(value, Bson::String("2024-06-01".into()));
    assert_eq!(tie, Some(Bson::ObjectId(oid)));
}

#[test]
fn test_foreign_tokens_are_rejected() {
    for token in ["", "AAAA", "obj_123", "eyJmb28iOiJiYXIifQ"] {
        let err = cursor::decode(token).unwrap_err();
        assert!(err.is_malformed_cursor(), "token {token:?} should be rejected");
    }
}

// ============================================================================
// Parameters To Query Flow
// ============================================================================

#[test]
fn test_first_page_query_from_defaults() {
    let params = PaginationParams::new(doc! { "published": true }).normalized();
    assert_eq!(params.limit, DEFAULT_LIMIT);

    let (clauses, sort) = query::build_queries(&params).unwrap();
    assert_eq!(clauses, vec![doc! { "published": true }]);
    assert_eq!(sort, doc! { "_id": 1 });
}

#[test]
fn test_follow_up_page_query_carries_range_clause() {
    let boundary = ObjectId::new();
    let token = cursor::encode(&Bson::ObjectId(boundary), None).unwrap();

    let params = PaginationParams::new(doc! { "published": true })
        .with_limit(20)
        .with_next(token)
        .normalized();
    params.validate().unwrap();

    let (clauses, _) = query::build_queries(&params).unwrap();
    assert_eq!(clauses[0], doc! { "published": true });
    assert_eq!(clauses[1], doc! { "_id": { "$gt": boundary } });
}

#[test]
fn test_dual_direction_input_fails_validation() {
    let params = PaginationParams::default().with_next("a").with_previous("b");
    assert!(params.validate().is_err());
}

// ============================================================================
// Population Pipeline
// ============================================================================

#[test]
fn test_author_population_pipeline() {
    let populates = vec![PopulateOptions::new("authors", "authorId")
        .with_projection(vec!["name".to_string()])];
    let pipeline = populate::build_pipeline(doc! { "published": true }, &populates);

    assert_eq!(
        pipeline,
        vec![
            doc! { "$match": { "published": true } },
            doc! { "$lookup": {
                "from": "authors",
                "let": { "fk": "$authorId" },
                "pipeline": [
                    { "$match": { "$expr": { "$eq": ["$_id", "$$fk"] } } },
                    { "$project": { "name": 1 } },
                ],
                "as": "authorId",
            }},
            doc! { "$addFields": { "authorId": { "$first": "$authorId" } } },
        ]
    );
}

// ============================================================================
// Page Descriptor
// ============================================================================

#[test]
fn test_page_serialization_round_trip() {
    let page = Page {
        previous: None,
        has_previous: false,
        next: Some("token".to_string()),
        has_next: true,
        count: Some(5),
    };

    let doc = to_document(&page).unwrap();
    let restored: Page = from_document(doc).unwrap();
    assert_eq!(restored, page);
}
