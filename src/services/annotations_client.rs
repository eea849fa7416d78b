use reqwest::Client;

use crate::config::{Credentials, UpstreamSettings};
use crate::deadline::with_deadline;
use crate::error::AppError;
use crate::models::{Annotation, RawAnnotation, RequestContext};
use crate::services::ids::canonical_concept_id;
use crate::services::predicate_mapper;

/// Lifecycle buckets considered "editorially curated" — everything upstream
/// knows about except the machine-generated `v2` bucket.
const EDITORIALLY_CURATED_LIFECYCLES: &[&str] = &["pac", "v1", "next-video", "manual"];

/// Fetches published annotations from the upstream delivery system.
pub struct AnnotationsClient {
    client: Client,
    url_template: String,
    credentials: Credentials,
    pac_origin_id: String,
    gtg_content_id: String,
}

impl AnnotationsClient {
    pub fn new(client: Client, settings: &UpstreamSettings, pac_origin_id: impl Into<String>) -> Self {
        Self {
            client,
            url_template: settings.annotations_url_template.clone(),
            credentials: settings.credentials.clone(),
            pac_origin_id: pac_origin_id.into(),
            gtg_content_id: settings.gtg_content_id.clone(),
        }
    }

    /// The full published set, unfiltered by lifecycle.
    pub async fn get_all(
        &self,
        content_id: &str,
        ctx: &RequestContext,
    ) -> Result<Vec<Annotation>, AppError> {
        self.fetch(content_id, &[], ctx).await
    }

    /// The subset produced by editors, excluding the `v2` lifecycle.
    pub async fn get_all_editorially_curated(
        &self,
        content_id: &str,
        ctx: &RequestContext,
    ) -> Result<Vec<Annotation>, AppError> {
        self.fetch(content_id, EDITORIALLY_CURATED_LIFECYCLES, ctx)
            .await
    }

    async fn fetch(
        &self,
        content_id: &str,
        lifecycles: &[&str],
        ctx: &RequestContext,
    ) -> Result<Vec<Annotation>, AppError> {
        let url = self.url_template.replace("{content_id}", content_id);

        let mut query: Vec<(&str, &str)> =
            lifecycles.iter().map(|lc| ("lifecycle", *lc)).collect();
        query.push(("showPublication", "true"));

        let request = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .query(&query)
            .send();

        let response = with_deadline(ctx.remaining(), async { Ok(request.await?) }).await?;
        let status = response.status();

        match status.as_u16() {
            200 => {
                let raw: Vec<RawAnnotation> = response.json().await?;
                let annotations = if ctx.is_pac_origin(&self.pac_origin_id) {
                    predicate_mapper::map(raw)
                } else {
                    raw.into_iter().filter_map(decode_as_internal).collect()
                };

                if annotations.is_empty() {
                    Err(AppError::NoAnnotations)
                } else {
                    Ok(annotations)
                }
            }
            400 => Err(AppError::UpstreamBadRequest(response.text().await.ok())),
            404 => Err(AppError::UpstreamNotFound(response.text().await.ok())),
            other => Err(AppError::UpstreamUnavailable(other)),
        }
    }

    /// GET against a fixed synthetic content id; any non-200 means not ready.
    pub async fn gtg(&self, ctx: &RequestContext) -> bool {
        let url = self.url_template.replace("{content_id}", &self.gtg_content_id);
        let request = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send();

        match with_deadline(ctx.remaining(), async { Ok(request.await?) }).await {
            Ok(response) => response.status().as_u16() == 200,
            Err(_) => false,
        }
    }
}

/// Reinterprets a raw annotation as already being in the internal
/// vocabulary — used for non-PAC origins, whose upstream feed does not go
/// through the predicate mapper's rewrite table.
fn decode_as_internal(raw: RawAnnotation) -> Option<Annotation> {
    let predicate = raw.predicate?;
    let id = canonical_concept_id(&raw.id?)?;
    let mut annotation = Annotation::new(predicate, id);
    annotation.concept_type = raw.types.last().cloned();
    annotation.extra = raw.extra;
    Some(annotation)
}
