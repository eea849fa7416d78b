use serde_json::Value;

use crate::error::AppError;
use crate::models::{Annotation, ApiDocument, JsonObject, MutationBody, RequestContext, StoredDraftDocument};
use crate::services::annotations_client::AnnotationsClient;
use crate::services::augmenter::augment;
use crate::services::canonicalizer::canonicalize;
use crate::services::concept_resolver::ConceptResolver;
use crate::services::draft_store::DraftStoreClient;
use crate::services::ids::canonical_concept_id;
use crate::services::predicate_mapper;
use crate::services::validation::Validator;

/// Orchestrates the five user-level operations over the Concept Resolver,
/// Upstream Annotations Client, Draft Store Client, Predicate Mapper,
/// Canonicalizer and Augmenter. Every step within one call runs strictly in
/// sequence — no step ever observes a partial result of a later one.
pub struct MergeEngine {
    annotations_client: AnnotationsClient,
    concept_resolver: ConceptResolver,
    draft_store: DraftStoreClient,
    validator: Validator,
    pac_origin_id: String,
}

impl MergeEngine {
    pub fn new(
        annotations_client: AnnotationsClient,
        concept_resolver: ConceptResolver,
        draft_store: DraftStoreClient,
        validator: Validator,
        pac_origin_id: impl Into<String>,
    ) -> Self {
        Self {
            annotations_client,
            concept_resolver,
            draft_store,
            validator,
            pac_origin_id: pac_origin_id.into(),
        }
    }

    pub fn annotations_client(&self) -> &AnnotationsClient {
        &self.annotations_client
    }

    pub fn concept_resolver(&self) -> &ConceptResolver {
        &self.concept_resolver
    }

    /// Exposes the schema validator directly, for `POST /validate`'s
    /// caller-chosen schema name rather than the fixed one used internally
    /// by [`Self::replace`].
    pub fn validate(&self, schema_name: &str, body: &Value) -> Result<(), AppError> {
        self.validator.validate(schema_name, body)
    }

    /// Uses the persisted draft if one exists, otherwise falls back to the
    /// full published set. Always re-augments — the draft store never holds
    /// concept metadata, so this can never return a stale `prefLabel`.
    pub async fn read(
        &self,
        content_id: &str,
        send_has_brand: bool,
        ctx: &RequestContext,
    ) -> Result<(ApiDocument, Option<String>), AppError> {
        let (stored, hash) = self.draft_store.read(content_id, ctx).await?;

        let (annotations, other) = match stored {
            Some(document) => (
                document.annotations.into_iter().map(Annotation::from).collect(),
                document.other,
            ),
            None => (
                self.annotations_client.get_all(content_id, ctx).await?,
                JsonObject::new(),
            ),
        };

        let mut annotations = augment(annotations, &self.concept_resolver, ctx).await?;

        if !send_has_brand {
            predicate_mapper::from_has_brand(&mut annotations);
        }

        Ok((ApiDocument { annotations, other }, hash))
    }

    /// Full replace. `body` is the raw request JSON so it can be validated
    /// against the `annotations` schema before being parsed.
    pub async fn replace(
        &self,
        content_id: &str,
        body: Value,
        previous_hash: &str,
        ctx: &RequestContext,
    ) -> Result<(ApiDocument, String), AppError> {
        self.validator.validate("annotations", &body)?;

        let document: ApiDocument = serde_json::from_value(body)?;
        require_publication(&document.other)?;

        self.finish_mutation(content_id, document.annotations, document.other, previous_hash, ctx)
            .await
    }

    /// Fetches the editorially curated base set, skips the append if the
    /// `(predicate, id)` pair is already present, then runs the common
    /// augment/switch/canonicalize/write tail.
    pub async fn add(
        &self,
        content_id: &str,
        body: MutationBody,
        previous_hash: &str,
        ctx: &RequestContext,
    ) -> Result<(ApiDocument, String), AppError> {
        require_publication(&body.other)?;

        let predicate = body
            .annotation
            .predicate
            .ok_or_else(|| AppError::InvalidRequest("annotation predicate is required".into()))?;
        self.require_valid_predicate_if_pac(&predicate, ctx)?;

        let id = canonical_concept_id(&body.annotation.id)
            .ok_or_else(|| AppError::InvalidRequest("annotation id has no path segment".into()))?;

        let mut base = self
            .annotations_client
            .get_all_editorially_curated(content_id, ctx)
            .await?;

        let already_present = base.iter().any(|a| a.predicate == predicate && a.id == id);
        if !already_present {
            base.push(Annotation::new(predicate, id));
        }

        self.finish_mutation(content_id, base, body.other, previous_hash, ctx)
            .await
    }

    /// Drops every entry in the editorially curated base set whose `id`
    /// matches `concept_iri`. Note this rebuilds from upstream, not from the
    /// current draft, so it discards any pending draft edits beyond the
    /// deletion itself — see DESIGN.md for why this follows the source.
    pub async fn delete(
        &self,
        content_id: &str,
        concept_iri: &str,
        other: JsonObject,
        previous_hash: &str,
        ctx: &RequestContext,
    ) -> Result<(ApiDocument, String), AppError> {
        require_publication(&other)?;

        let base = self
            .annotations_client
            .get_all_editorially_curated(content_id, ctx)
            .await?;

        let remaining: Vec<Annotation> = base.into_iter().filter(|a| a.id != concept_iri).collect();

        self.finish_mutation(content_id, remaining, other, previous_hash, ctx)
            .await
    }

    /// For every base-set entry whose `id` equals `concept_iri`, overwrites
    /// its `id` with the replacement and, if supplied, its `predicate`. Only
    /// the identity fields are carried forward — everything else is cleared
    /// and refilled by the subsequent augmentation pass.
    pub async fn patch(
        &self,
        content_id: &str,
        concept_iri: &str,
        body: MutationBody,
        previous_hash: &str,
        ctx: &RequestContext,
    ) -> Result<(ApiDocument, String), AppError> {
        require_publication(&body.other)?;

        if let Some(predicate) = &body.annotation.predicate {
            self.require_valid_predicate_if_pac(predicate, ctx)?;
        }

        let replacement_id = canonical_concept_id(&body.annotation.id)
            .ok_or_else(|| AppError::InvalidRequest("annotation id has no path segment".into()))?;

        let base = self
            .annotations_client
            .get_all_editorially_curated(content_id, ctx)
            .await?;

        let updated: Vec<Annotation> = base
            .into_iter()
            .map(|mut annotation| {
                if annotation.id == concept_iri {
                    annotation.id = replacement_id.clone();
                    if let Some(predicate) = &body.annotation.predicate {
                        annotation.predicate = predicate.clone();
                    }
                    annotation.clear_metadata();
                }
                annotation
            })
            .collect();

        self.finish_mutation(content_id, updated, body.other, previous_hash, ctx)
            .await
    }

    pub async fn gtg(&self, ctx: &RequestContext) -> bool {
        let (annotations_ok, concepts_ok) = tokio::join!(
            self.annotations_client.gtg(ctx),
            self.concept_resolver.gtg(ctx)
        );
        annotations_ok && concepts_ok
    }

    fn require_valid_predicate_if_pac(
        &self,
        predicate: &str,
        ctx: &RequestContext,
    ) -> Result<(), AppError> {
        if ctx.is_pac_origin(&self.pac_origin_id) && !predicate_mapper::is_valid_predicate(predicate) {
            return Err(AppError::InvalidRequest(format!(
                "'{predicate}' is not a valid predicate"
            )));
        }
        Ok(())
    }

    /// Augment → hasBrand-switch → Canonicalize → Write, shared by every
    /// mutation. Returns the augmented (non-canonical) list alongside the
    /// store's new hash, so the HTTP surface can echo back the same shape a
    /// read would produce.
    async fn finish_mutation(
        &self,
        content_id: &str,
        annotations: Vec<Annotation>,
        other: JsonObject,
        previous_hash: &str,
        ctx: &RequestContext,
    ) -> Result<(ApiDocument, String), AppError> {
        let mut augmented = augment(annotations, &self.concept_resolver, ctx).await?;
        predicate_mapper::to_has_brand(&mut augmented);

        let canonical = canonicalize(&augmented);
        let stored = StoredDraftDocument {
            annotations: canonical,
            other: other.clone(),
        };

        let new_hash = self
            .draft_store
            .write(content_id, &stored, previous_hash, ctx)
            .await?;

        Ok((
            ApiDocument {
                annotations: augmented,
                other,
            },
            new_hash,
        ))
    }
}

fn require_publication(other: &JsonObject) -> Result<(), AppError> {
    match other.get("publication") {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(AppError::InvalidRequest("'publication' must be an array".into())),
        None => Err(AppError::InvalidRequest("'publication' is required".into())),
    }
}
