use std::time::Duration;

use axum::http::HeaderMap;
use tokio::time::Instant;
use uuid::Uuid;

use crate::config::Settings;
use crate::error::AppError;

const TRANSACTION_ID_HEADER: &str = "X-Request-Id";
const ORIGIN_SYSTEM_ID_HEADER: &str = "X-Origin-System-Id";
const SCHEMA_VERSION_HEADER: &str = "X-Schema-Version";

/// Per-request bundle threaded through every outbound call. Built once at
/// the top of the HTTP surface's request pipeline.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub transaction_id: String,
    pub origin_system_id: String,
    pub schema_version: String,
    pub deadline: Instant,
}

impl RequestContext {
    pub fn from_headers(headers: &HeaderMap, settings: &Settings) -> Result<Self, AppError> {
        let transaction_id = header_str(headers, TRANSACTION_ID_HEADER)
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let origin_system_id = header_str(headers, ORIGIN_SYSTEM_ID_HEADER)
            .map(str::to_owned)
            .ok_or_else(|| {
                AppError::InvalidRequest(format!("missing {ORIGIN_SYSTEM_ID_HEADER} header"))
            })?;

        let schema_version = header_str(headers, SCHEMA_VERSION_HEADER)
            .map(str::to_owned)
            .unwrap_or_else(|| settings.default_schema_version.clone());

        let deadline = Instant::now() + Duration::from_millis(settings.request_deadline_ms);

        Ok(Self {
            transaction_id,
            origin_system_id,
            schema_version,
            deadline,
        })
    }

    /// Built for the `/__gtg` probe, which has no inbound headers of its own
    /// to parse. The GTG probes themselves don't branch on origin, so the
    /// origin id here is a label only.
    pub fn synthetic(settings: &Settings) -> Self {
        Self {
            transaction_id: Uuid::new_v4().to_string(),
            origin_system_id: "gtg-probe".to_string(),
            schema_version: settings.default_schema_version.clone(),
            deadline: Instant::now() + Duration::from_millis(settings.request_deadline_ms),
        }
    }

    pub fn is_pac_origin(&self, pac_origin_id: &str) -> bool {
        self.origin_system_id == pac_origin_id
    }

    /// Time remaining until the request's deadline, floored at zero so a
    /// `tokio::time::timeout` built from it fires immediately rather than
    /// panicking on a negative duration.
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
