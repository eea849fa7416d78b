use axum::extract::Extension;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::error::AppError;

const SCHEMA_NAME_HEADER: &str = "Schema-Name";

pub async fn validate(
    headers: HeaderMap,
    Extension(ctx): Extension<AppContext>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let schema_name = headers
        .get(SCHEMA_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::InvalidRequest(format!("missing {SCHEMA_NAME_HEADER} header")))?;

    ctx.merge_engine().validate(schema_name, &body)?;

    Ok((StatusCode::OK, Json(json!({ "valid": true }))))
}
