use std::collections::HashMap;

use serde::Deserialize;

/// Concept metadata as returned by the concept resolver. Request-scoped only
/// — never persisted, never cached across requests.
#[derive(Debug, Clone, Deserialize)]
pub struct Concept {
    #[serde(rename = "apiUrl", default)]
    pub api_url: Option<String>,
    #[serde(rename = "type", default)]
    pub concept_type: Option<String>,
    #[serde(rename = "prefLabel", default)]
    pub pref_label: Option<String>,
    #[serde(rename = "isFTAuthor", default)]
    pub is_ft_author: Option<bool>,
}

/// Wire shape of the concept resolver's batch response:
/// `{"concepts": {"<id>": {...}, ...}}`.
#[derive(Debug, Deserialize)]
pub struct ConceptResolverResponse {
    #[serde(default)]
    pub concepts: HashMap<String, Concept>,
}
