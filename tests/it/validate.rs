use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::support::spawn_app;

#[tokio::test]
async fn validate_accepts_a_well_formed_annotations_document() {
    let app = spawn_app().await;

    let body = json!({
        "annotations": [{"predicate": "about", "id": "http://www.ft.com/thing/a"}],
        "publication": ["pink"]
    });

    let response = app
        .request(Method::POST, "/validate", &[("Schema-Name", "annotations")], Some(body))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["valid"], true);
}

#[tokio::test]
async fn validate_rejects_a_document_missing_publication() {
    let app = spawn_app().await;

    let body = json!({ "annotations": [] });

    let response = app
        .request(Method::POST, "/validate", &[("Schema-Name", "annotations")], Some(body))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validate_rejects_missing_schema_name_header() {
    let app = spawn_app().await;

    let response = app
        .request(Method::POST, "/validate", &[], Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
