use serde::Deserialize;

use crate::models::JsonObject;

/// The `annotation` field of an Add/Patch request body. `predicate` is
/// optional — Patch only carries it when the editor wants to change the
/// relation, and relies on re-augmentation to refill everything else.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationInput {
    #[serde(default)]
    pub predicate: Option<String>,
    pub id: String,
}

/// Wire shape of the Add (`POST`) and Patch (`PATCH`) request bodies:
/// `{"annotation": {...}, "publication": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MutationBody {
    pub annotation: AnnotationInput,
    #[serde(flatten)]
    pub other: JsonObject,
}

/// Query parameters accepted by the read endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadQuery {
    #[serde(rename = "sendHasBrand", default)]
    pub send_has_brand: bool,
}
