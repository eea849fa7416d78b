use sha2::{Digest, Sha224};

use crate::models::{Annotation, CanonicalAnnotation};

/// Projects `annotations` down to `{predicate, id}`, sorted lexicographically
/// by `(predicate, id)`. Does not mutate or consume its input, and does not
/// deduplicate — callers that need uniqueness (Add) enforce it themselves
/// before this step.
pub fn canonicalize(annotations: &[Annotation]) -> Vec<CanonicalAnnotation> {
    let mut canonical: Vec<CanonicalAnnotation> =
        annotations.iter().map(CanonicalAnnotation::from).collect();
    canonical.sort();
    canonical
}

/// A stable content hash over the canonical form: SHA-224 of the JSON
/// encoding, hex-encoded. Two annotation sets are equivalent iff this value
/// matches, independent of insertion order or non-identity fields — which
/// holds because `canonicalize` has already discarded both.
pub fn content_hash(canonical: &[CanonicalAnnotation]) -> Result<String, serde_json::Error> {
    let encoded = serde_json::to_vec(canonical)?;
    let mut hasher = Sha224::new();
    hasher.update(&encoded);
    Ok(hex::encode(hasher.finalize()))
}
