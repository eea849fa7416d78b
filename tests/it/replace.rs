use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::support::spawn_app;

/// Scenario 2 from the spec: a full replace does not consult the draft
/// store's read path at all, augments the submitted list, canonicalizes it
/// (hasAuthor sorts before mentions), and writes with the previous hash.
#[tokio::test]
async fn replace_writes_augmented_canonical_form_with_previous_hash() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";

    let _concepts = app
        .server
        .mock("GET", "/concepts")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"concepts": {"p1": {"type": "Person", "prefLabel": "A Person"}, "p2": {"type": "Person", "prefLabel": "Another Person"}}}"#,
        )
        .create_async()
        .await;
    let write_mock = app
        .server
        .mock("POST", format!("/draft-annotations/{content_id}").as_str())
        .match_header("Previous-Document-Hash", "h0")
        .match_body(mockito::Matcher::PartialJsonString(
            json!({
                "annotations": [
                    {"predicate": "hasAuthor", "id": "http://www.ft.com/thing/p2"},
                    {"predicate": "mentions", "id": "http://www.ft.com/thing/p1"}
                ]
            })
            .to_string(),
        ))
        .with_status(200)
        .with_header("Document-Hash", "h1")
        .create_async()
        .await;

    let body = json!({
        "annotations": [
            {"predicate": "mentions", "id": "http://www.ft.com/thing/p1"},
            {"predicate": "hasAuthor", "id": "http://www.ft.com/thing/p2"}
        ],
        "publication": [{"platform": "pink"}]
    });

    let response = app
        .request(
            Method::PUT,
            &format!("/drafts/content/{content_id}/annotations"),
            &[
                ("X-Origin-System-Id", "pac"),
                ("Previous-Document-Hash", "h0"),
            ],
            Some(body),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["Document-Hash"], "h1");

    write_mock.assert_async().await;

    let annotations = response.body["annotations"].as_array().unwrap();
    assert_eq!(annotations.len(), 2);
    assert!(annotations.iter().any(|a| a["predicate"] == "hasAuthor"));
    assert!(annotations.iter().any(|a| a["predicate"] == "mentions"));
}

#[tokio::test]
async fn replace_rejects_body_missing_publication() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";

    let body = json!({ "annotations": [] });

    let response = app
        .request(
            Method::PUT,
            &format!("/drafts/content/{content_id}/annotations"),
            &[
                ("X-Origin-System-Id", "pac"),
                ("Previous-Document-Hash", ""),
            ],
            Some(body),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// The store rejecting a stale previous-hash must surface verbatim, with no
/// retry attempted.
#[tokio::test]
async fn replace_surfaces_store_conflict_without_retry() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";

    let _concepts = app
        .server
        .mock("GET", "/concepts")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"concepts": {"p1": {"type": "Person"}}}"#)
        .create_async()
        .await;
    let write_mock = app
        .server
        .mock("POST", format!("/draft-annotations/{content_id}").as_str())
        .with_status(409)
        .with_body(r#"{"message": "hash mismatch"}"#)
        .expect(1)
        .create_async()
        .await;

    let body = json!({
        "annotations": [{"predicate": "mentions", "id": "http://www.ft.com/thing/p1"}],
        "publication": []
    });

    let response = app
        .request(
            Method::PUT,
            &format!("/drafts/content/{content_id}/annotations"),
            &[
                ("X-Origin-System-Id", "pac"),
                ("Previous-Document-Hash", "stale"),
            ],
            Some(body),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    write_mock.assert_async().await;
}
