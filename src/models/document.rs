use serde::{Deserialize, Serialize};

use crate::models::{Annotation, CanonicalAnnotation, JsonObject};

/// The HTTP-facing document shape: what editors PUT/POST/PATCH and what a
/// GET response returns. `annotations` carries full, possibly-augmented
/// annotations; `other` passes through `publication` and any future sibling
/// keys untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiDocument {
    pub annotations: Vec<Annotation>,
    #[serde(flatten)]
    pub other: JsonObject,
}

/// The shape actually read from and written to the draft store. Annotations
/// here are always the canonical `{predicate, id}` projection — the store
/// never holds concept metadata, so a read can never return a stale
/// `prefLabel` or `apiUrl`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredDraftDocument {
    pub annotations: Vec<CanonicalAnnotation>,
    #[serde(flatten)]
    pub other: JsonObject,
}
