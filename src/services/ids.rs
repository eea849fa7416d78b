use uuid::Uuid;

use crate::error::AppError;

const THING_PREFIX: &str = "http://www.ft.com/thing/";

/// Returns the final `/`-delimited segment of `id`, or `None` if `id` has no
/// path structure to speak of (empty, or entirely slashes).
pub fn last_path_segment(id: &str) -> Option<&str> {
    id.rsplit('/').find(|segment| !segment.is_empty())
}

/// Rewrites an upstream concept id into this service's canonical
/// `www.ft.com/thing/<uuid>` form, keeping only the last path segment.
/// Returns `None` if `id` has no extractable segment.
pub fn canonical_concept_id(id: &str) -> Option<String> {
    last_path_segment(id).map(|segment| format!("{THING_PREFIX}{segment}"))
}

/// Parses `value` as a UUID, rejecting the request otherwise. Used for the
/// `{uuid}` and `{cuuid}` path segments, both of which must be bare UUIDs
/// (the canonical id wrapping happens separately, after this check passes).
pub fn require_uuid(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::InvalidRequest(format!("'{value}' is not a valid UUID")))
}
