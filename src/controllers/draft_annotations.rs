use axum::extract::{Extension, Path, Query};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::config::settings;
use crate::context::AppContext;
use crate::error::AppError;
use crate::models::{ApiDocument, JsonObject, MutationBody, ReadQuery, RequestContext};
use crate::services::ids::require_uuid;

const DOCUMENT_HASH_HEADER: &str = "Document-Hash";
const PREVIOUS_HASH_HEADER: &str = "Previous-Document-Hash";

pub async fn read(
    Path(content_id): Path<String>,
    Query(query): Query<ReadQuery>,
    headers: HeaderMap,
    Extension(ctx): Extension<AppContext>,
) -> Result<impl IntoResponse, AppError> {
    let content_id = require_uuid(&content_id)?.to_string();
    let request_ctx = RequestContext::from_headers(&headers, settings())?;

    let (document, hash) = ctx
        .merge_engine()
        .read(&content_id, query.send_has_brand, &request_ctx)
        .await?;

    Ok(respond(StatusCode::OK, &document, hash))
}

pub async fn replace(
    Path(content_id): Path<String>,
    headers: HeaderMap,
    Extension(ctx): Extension<AppContext>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let content_id = require_uuid(&content_id)?.to_string();
    let request_ctx = RequestContext::from_headers(&headers, settings())?;
    let previous_hash = previous_hash_header(&headers);

    let (document, new_hash) = ctx
        .merge_engine()
        .replace(&content_id, body, &previous_hash, &request_ctx)
        .await?;

    Ok(respond(StatusCode::OK, &document, Some(new_hash)))
}

pub async fn add(
    Path(content_id): Path<String>,
    headers: HeaderMap,
    Extension(ctx): Extension<AppContext>,
    Json(body): Json<MutationBody>,
) -> Result<impl IntoResponse, AppError> {
    let content_id = require_uuid(&content_id)?.to_string();
    let request_ctx = RequestContext::from_headers(&headers, settings())?;
    let previous_hash = previous_hash_header(&headers);

    let (document, new_hash) = ctx
        .merge_engine()
        .add(&content_id, body, &previous_hash, &request_ctx)
        .await?;

    Ok(respond(StatusCode::OK, &document, Some(new_hash)))
}

pub async fn patch(
    Path((content_id, concept_id)): Path<(String, String)>,
    headers: HeaderMap,
    Extension(ctx): Extension<AppContext>,
    Json(body): Json<MutationBody>,
) -> Result<impl IntoResponse, AppError> {
    let content_id = require_uuid(&content_id)?.to_string();
    let concept_uuid = require_uuid(&concept_id)?;
    let request_ctx = RequestContext::from_headers(&headers, settings())?;
    let previous_hash = previous_hash_header(&headers);
    let concept_iri = format!("http://www.ft.com/thing/{concept_uuid}");

    let (document, new_hash) = ctx
        .merge_engine()
        .patch(&content_id, &concept_iri, body, &previous_hash, &request_ctx)
        .await?;

    Ok(respond(StatusCode::OK, &document, Some(new_hash)))
}

pub async fn delete(
    Path((content_id, concept_id)): Path<(String, String)>,
    headers: HeaderMap,
    Extension(ctx): Extension<AppContext>,
    Json(other): Json<JsonObject>,
) -> Result<impl IntoResponse, AppError> {
    let content_id = require_uuid(&content_id)?.to_string();
    let concept_uuid = require_uuid(&concept_id)?;
    let request_ctx = RequestContext::from_headers(&headers, settings())?;
    let previous_hash = previous_hash_header(&headers);
    let concept_iri = format!("http://www.ft.com/thing/{concept_uuid}");

    let (document, new_hash) = ctx
        .merge_engine()
        .delete(&content_id, &concept_iri, other, &previous_hash, &request_ctx)
        .await?;

    Ok(respond(StatusCode::OK, &document, Some(new_hash)))
}

fn previous_hash_header(headers: &HeaderMap) -> String {
    headers
        .get(PREVIOUS_HASH_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Builds the shared response shape: the document as the JSON body, plus the
/// `Document-Hash` header when a hash is available — on every write, and on
/// a read that found a persisted draft.
fn respond(status: StatusCode, document: &ApiDocument, hash: Option<String>) -> Response {
    let mut response = (status, Json(document)).into_response();

    if let Some(hash) = hash {
        if let Ok(value) = HeaderValue::from_str(&hash) {
            response.headers_mut().insert(DOCUMENT_HASH_HEADER, value);
        }
    }

    response
}
