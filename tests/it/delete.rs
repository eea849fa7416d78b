use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::support::spawn_app;

/// Scenario 3: deleting a concept present only in upstream (no draft exists)
/// rebuilds the base set from the editorially curated upstream feed and
/// drops every entry matching the path concept id.
#[tokio::test]
async fn delete_removes_matching_concept_from_upstream_base_set() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";
    let c1_uuid = "11111111-1111-1111-1111-111111111111";
    let c2_uuid = "22222222-2222-2222-2222-222222222222";
    let c1 = format!("http://www.ft.com/thing/{c1_uuid}");
    let c2 = format!("http://www.ft.com/thing/{c2_uuid}");

    let _upstream = app
        .server
        .mock("GET", format!("/content/{content_id}/annotations").as_str())
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(format!(
            r#"[{{"predicate":"about","id":"{c1}","types":["Topic"]}},
                {{"predicate":"about","id":"{c2}","types":["Topic"]}}]"#
        ))
        .create_async()
        .await;
    let _concepts = app
        .server
        .mock("GET", "/concepts")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(format!(
            r#"{{"concepts": {{"{c1_uuid}": {{"type": "Topic"}}, "{c2_uuid}": {{"type": "Topic"}}}}}}"#
        ))
        .create_async()
        .await;
    let _write = app
        .server
        .mock("POST", format!("/draft-annotations/{content_id}").as_str())
        .with_status(200)
        .with_header("Document-Hash", "h1")
        .create_async()
        .await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/drafts/content/{content_id}/annotations/{c1_uuid}"),
            &[
                ("X-Origin-System-Id", "other-origin"),
                ("Previous-Document-Hash", "h0"),
            ],
            Some(json!({ "publication": [] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let annotations = response.body["annotations"].as_array().unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0]["id"], c2);
}

#[tokio::test]
async fn delete_rejects_non_uuid_concept_id() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";

    let response = app
        .request(
            Method::DELETE,
            &format!("/drafts/content/{content_id}/annotations/not-a-uuid"),
            &[
                ("X-Origin-System-Id", "other-origin"),
                ("Previous-Document-Hash", "h0"),
            ],
            Some(json!({ "publication": [] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
