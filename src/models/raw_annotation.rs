use serde::Deserialize;

use crate::models::JsonObject;

/// The shape an annotation arrives in straight off the upstream wire, before
/// the predicate mapper has had a chance to normalize its vocabulary. Unlike
/// [`crate::models::Annotation`] this carries `types` (plural, upstream's
/// classification hierarchy) rather than a single resolved `type`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnnotation {
    #[serde(default)]
    pub predicate: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}
