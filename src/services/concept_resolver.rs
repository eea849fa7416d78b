use std::collections::HashMap;

use reqwest::Client;

use crate::config::{Credentials, UpstreamSettings};
use crate::deadline::with_deadline;
use crate::error::AppError;
use crate::models::{Concept, ConceptResolverResponse, RequestContext};

/// Batched lookup of concept metadata by id. Request-scoped: nothing here is
/// cached between calls.
pub struct ConceptResolver {
    client: Client,
    endpoint: String,
    credentials: Credentials,
    batch_size: usize,
    gtg_concept_id: String,
}

impl ConceptResolver {
    pub fn new(client: Client, settings: &UpstreamSettings, batch_size: usize) -> Self {
        Self {
            client,
            endpoint: settings.concept_resolver_url.clone(),
            credentials: settings.credentials.clone(),
            batch_size: batch_size.max(1),
            gtg_concept_id: settings.gtg_concept_id.clone(),
        }
    }

    /// Splits `ids` into batches of the configured size, issuing one GET per
    /// batch with the full batch as a repeated `ids` query parameter. Partial
    /// failure of any batch aborts the whole lookup with the first error;
    /// ids simply absent from an upstream response are silently absent from
    /// the returned map.
    pub async fn lookup(
        &self,
        ids: &[String],
        ctx: &RequestContext,
    ) -> Result<HashMap<String, Concept>, AppError> {
        let mut merged = HashMap::new();

        for batch in ids.chunks(self.batch_size) {
            let batch_result = self.lookup_batch(batch, ctx).await?;
            merged.extend(batch_result);
        }

        Ok(merged)
    }

    async fn lookup_batch(
        &self,
        batch: &[String],
        ctx: &RequestContext,
    ) -> Result<HashMap<String, Concept>, AppError> {
        if batch.is_empty() {
            return Ok(HashMap::new());
        }

        let query: Vec<(&str, &str)> = batch.iter().map(|id| ("ids", id.as_str())).collect();

        let request = self
            .client
            .get(&self.endpoint)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .query(&query)
            .send();

        let response = with_deadline(ctx.remaining(), async { Ok(request.await?) }).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(AppError::UpstreamUnavailable(status.as_u16()));
        }

        let body: ConceptResolverResponse = response.json().await?;
        Ok(body.concepts)
    }

    /// A single-id lookup against a known sentinel concept; any error means
    /// not ready.
    pub async fn gtg(&self, ctx: &RequestContext) -> bool {
        let ids = [self.gtg_concept_id.clone()];
        self.lookup(&ids, ctx).await.is_ok()
    }
}
