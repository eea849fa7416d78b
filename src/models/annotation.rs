use serde::{Deserialize, Serialize};

use crate::models::JsonObject;

/// A semantic annotation in the internal vocabulary, as carried across the
/// HTTP surface and through the merge engine. `predicate` and `id` are the
/// identity pair; the remaining fields are populated by the augmenter and
/// stripped again by the canonicalizer before anything is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub predicate: String,
    pub id: String,
    #[serde(rename = "apiUrl", skip_serializing_if = "Option::is_none", default)]
    pub api_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub concept_type: Option<String>,
    #[serde(rename = "prefLabel", skip_serializing_if = "Option::is_none", default)]
    pub pref_label: Option<String>,
    #[serde(rename = "isFTAuthor", skip_serializing_if = "Option::is_none", default)]
    pub is_ft_author: Option<bool>,
    /// Fields neither this service nor the upstream vocabulary understands,
    /// preserved verbatim for forward compatibility.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Annotation {
    pub fn new(predicate: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            id: id.into(),
            api_url: None,
            concept_type: None,
            pref_label: None,
            is_ft_author: None,
            extra: JsonObject::new(),
        }
    }

    /// Drops augmentation metadata, leaving only the identity pair plus
    /// whatever forward-compatible fields were attached. Used before
    /// re-augmenting a patched annotation so it never inherits stale
    /// concept metadata from its previous identity.
    pub fn clear_metadata(&mut self) {
        self.api_url = None;
        self.concept_type = None;
        self.pref_label = None;
        self.is_ft_author = None;
        self.extra.clear();
    }
}

/// The `{predicate, id}` projection that defines equivalence between two
/// annotation sets and is the only shape ever written to the draft store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalAnnotation {
    pub predicate: String,
    pub id: String,
}

impl From<CanonicalAnnotation> for Annotation {
    fn from(value: CanonicalAnnotation) -> Self {
        Annotation::new(value.predicate, value.id)
    }
}

impl From<&Annotation> for CanonicalAnnotation {
    fn from(value: &Annotation) -> Self {
        CanonicalAnnotation {
            predicate: value.predicate.clone(),
            id: value.id.clone(),
        }
    }
}
