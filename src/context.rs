use std::sync::Arc;

use reqwest::Client;

use crate::config::Settings;
use crate::services::{AnnotationsClient, ConceptResolver, DraftStoreClient, MergeEngine, Validator};

/// Request-handler-facing application state, shared across every connection
/// via an [`axum::Extension`]. Holds the one `reqwest::Client` (and its
/// connection pool) used by every outbound call.
#[derive(Clone)]
pub struct AppContext {
    merge_engine: Arc<MergeEngine>,
}

impl AppContext {
    pub fn new(settings: &Settings) -> Self {
        let http_client = Client::new();

        let annotations_client = AnnotationsClient::new(
            http_client.clone(),
            &settings.upstream,
            settings.pac_origin_id.clone(),
        );
        let concept_resolver = ConceptResolver::new(
            http_client.clone(),
            &settings.upstream,
            settings.concept_batch_size,
        );
        let draft_store = DraftStoreClient::new(http_client, &settings.draft_store);
        let validator = Validator::load();

        let merge_engine = MergeEngine::new(
            annotations_client,
            concept_resolver,
            draft_store,
            validator,
            settings.pac_origin_id.clone(),
        );

        Self {
            merge_engine: Arc::new(merge_engine),
        }
    }

    pub fn merge_engine(&self) -> &MergeEngine {
        &self.merge_engine
    }
}
