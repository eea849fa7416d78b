use crate::models::{Annotation, RawAnnotation};
use crate::services::ids::canonical_concept_id;

/// The closed set of predicates this service will ever store or return.
/// Anything not rewritten into one of these by [`map`] is dropped.
const VALID_PREDICATES: &[&str] = &[
    "about",
    "hasAuthor",
    "hasBrand",
    "hasContributor",
    "hasDisplayTag",
    "isClassifiedBy",
    "mentions",
];

pub fn is_valid_predicate(predicate: &str) -> bool {
    VALID_PREDICATES.contains(&predicate)
}

enum TypeClass {
    TopicOrLocation,
    BrandOrGenre,
    Other,
}

fn classify(concept_type: &str) -> TypeClass {
    match concept_type {
        "Topic" | "Location" => TypeClass::TopicOrLocation,
        "Brand" | "Genre" => TypeClass::BrandOrGenre,
        _ => TypeClass::Other,
    }
}

/// Rewrites a batch of raw, upstream-vocabulary annotations into this
/// service's internal vocabulary. Pure function: no I/O, no mutation of
/// concept metadata (that is the augmenter's job, run afterwards).
///
/// This is the table described as the contract: no conditional chain, one
/// match per predicate family, each arm consulting the concept's type class.
pub fn map(raw: Vec<RawAnnotation>) -> Vec<Annotation> {
    raw.into_iter().filter_map(map_one).collect()
}

fn map_one(raw: RawAnnotation) -> Option<Annotation> {
    let predicate = raw.predicate?;
    if raw.types.is_empty() {
        return None;
    }
    let id = raw.id?;
    let canonical_id = canonical_concept_id(&id)?;
    let concept_type = raw.types.last()?.clone();

    if concept_type == "SpecialReport" || concept_type == "Subject" {
        return None;
    }

    let class = classify(&concept_type);
    let new_predicate = match predicate.as_str() {
        "isClassifiedBy" => match class {
            TypeClass::TopicOrLocation => Some("about"),
            TypeClass::BrandOrGenre | TypeClass::Other => Some("isClassifiedBy"),
        },
        "isPrimarilyClassifiedBy" => match class {
            TypeClass::TopicOrLocation => Some("about"),
            TypeClass::BrandOrGenre => Some("isClassifiedBy"),
            TypeClass::Other => None,
        },
        "majorMentions" => Some("about"),
        "implicitlyAbout" | "implicitlyClassifiedBy" => None,
        other => {
            if is_valid_predicate(other) {
                Some(other)
            } else {
                None
            }
        }
    }?;

    let mut annotation = Annotation::new(new_predicate, canonical_id);
    annotation.extra = raw.extra;
    Some(annotation)
}

/// Rewrites `isClassifiedBy` to `hasBrand` wherever the (already-augmented)
/// concept type is `Brand`, in place. The write-time half of the switch
/// described in §3's invariants; unconditional on origin, since it is driven
/// by the concept's resolved type rather than who submitted the request.
pub fn to_has_brand(annotations: &mut [Annotation]) {
    for annotation in annotations.iter_mut() {
        if annotation.predicate == "isClassifiedBy"
            && annotation.concept_type.as_deref() == Some("Brand")
        {
            annotation.predicate = "hasBrand".to_string();
        }
    }
}

/// The inverse of [`to_has_brand`], applied on read when the caller did not
/// ask for the `hasBrand` vocabulary. Every `hasBrand` annotation came from
/// a `Brand` concept by construction, so no type check is needed here.
pub fn from_has_brand(annotations: &mut [Annotation]) {
    for annotation in annotations.iter_mut() {
        if annotation.predicate == "hasBrand" {
            annotation.predicate = "isClassifiedBy".to_string();
        }
    }
}
