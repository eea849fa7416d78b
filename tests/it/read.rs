use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::support::spawn_app;

/// Scenario 1 from the spec: the draft store has nothing for this content
/// id, so the read falls back to the upstream published set, is mapped
/// through the PAC predicate table, and comes back augmented.
#[tokio::test]
async fn falls_back_to_upstream_when_no_draft_exists() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";

    let _draft_miss = app
        .server
        .mock(
            "GET",
            format!("/draft-annotations/{content_id}").as_str(),
        )
        .with_status(404)
        .create_async()
        .await;
    let _upstream = app
        .server
        .mock("GET", format!("/content/{content_id}/annotations").as_str())
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[{"predicate":"isClassifiedBy","id":"http://api.ft.com/things/04789fc2","types":["Topic"]}]"#,
        )
        .create_async()
        .await;
    let _concepts = app
        .server
        .mock("GET", "/concepts")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"concepts": {"04789fc2": {"type": "Topic"}}}"#)
        .create_async()
        .await;

    let response = app
        .request(
            Method::GET,
            &format!("/drafts/content/{content_id}/annotations?sendHasBrand=false"),
            &[("X-Origin-System-Id", "pac")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.headers.contains_key("Document-Hash"));

    let annotations = response.body["annotations"].as_array().unwrap();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0]["predicate"], "about");
    assert_eq!(annotations[0]["id"], "http://www.ft.com/thing/04789fc2");
    assert_eq!(annotations[0]["type"], "Topic");
}

/// A read with `sendHasBrand=false` and one with `sendHasBrand=true` against
/// the same persisted draft must differ only in the hasBrand/isClassifiedBy
/// substitution for Brand-typed concepts.
#[tokio::test]
async fn send_has_brand_toggles_brand_predicate_on_read() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";

    let _draft = app
        .server
        .mock(
            "GET",
            format!("/draft-annotations/{content_id}").as_str(),
        )
        .with_status(200)
        .with_header("Document-Hash", "h0")
        .with_body(
            json!({
                "annotations": [{"predicate": "hasBrand", "id": "http://www.ft.com/thing/b1"}],
                "publication": ["pink"]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _concepts = app
        .server
        .mock("GET", "/concepts")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"concepts": {"b1": {"type": "Brand", "prefLabel": "Acme"}}}"#)
        .create_async()
        .await;

    let without_brand = app
        .request(
            Method::GET,
            &format!("/drafts/content/{content_id}/annotations?sendHasBrand=false"),
            &[("X-Origin-System-Id", "pac")],
            None,
        )
        .await;
    let with_brand = app
        .request(
            Method::GET,
            &format!("/drafts/content/{content_id}/annotations?sendHasBrand=true"),
            &[("X-Origin-System-Id", "pac")],
            None,
        )
        .await;

    assert_eq!(
        without_brand.body["annotations"][0]["predicate"],
        "isClassifiedBy"
    );
    assert_eq!(with_brand.body["annotations"][0]["predicate"], "hasBrand");
    assert_eq!(with_brand.headers["Document-Hash"], "h0");
}

#[tokio::test]
async fn rejects_non_uuid_content_id() {
    let app = spawn_app().await;

    let response = app
        .request(
            Method::GET,
            "/drafts/content/not-a-uuid/annotations",
            &[("X-Origin-System-Id", "pac")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejects_missing_origin_header() {
    let app = spawn_app().await;
    let content_id = "5a6a92c4-0d3c-11e7-aa5b-6bb07f5c9444";

    let response = app
        .request(
            Method::GET,
            &format!("/drafts/content/{content_id}/annotations"),
            &[],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
