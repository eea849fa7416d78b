use crate::error::AppError;
use crate::models::{Annotation, RequestContext};
use crate::services::concept_resolver::ConceptResolver;
use crate::services::ids::last_path_segment;

/// Attaches fresh concept metadata to `annotations`, dropping any annotation
/// whose concept could not be resolved. Order is preserved for survivors. A
/// lookup failure aborts the whole call with that error — this never
/// partially augments a list.
pub async fn augment(
    annotations: Vec<Annotation>,
    resolver: &ConceptResolver,
    ctx: &RequestContext,
) -> Result<Vec<Annotation>, AppError> {
    let ids: Vec<String> = annotations
        .iter()
        .filter_map(|annotation| last_path_segment(&annotation.id).map(str::to_owned))
        .collect();

    let concepts = resolver.lookup(&ids, ctx).await?;

    Ok(annotations
        .into_iter()
        .filter_map(|mut annotation| {
            let segment = last_path_segment(&annotation.id)?;
            let concept = concepts.get(segment)?;
            annotation.api_url = concept.api_url.clone();
            annotation.concept_type = concept.concept_type.clone();
            annotation.pref_label = concept.pref_label.clone();
            annotation.is_ft_author = concept.is_ft_author;
            Some(annotation)
        })
        .collect())
}
