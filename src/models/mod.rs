pub mod annotation;
pub mod concept;
pub mod document;
pub mod raw_annotation;
pub mod request;
pub mod request_context;

pub use annotation::{Annotation, CanonicalAnnotation};
pub use concept::{Concept, ConceptResolverResponse};
pub use document::{ApiDocument, StoredDraftDocument};
pub use raw_annotation::RawAnnotation;
pub use request::{AnnotationInput, MutationBody, ReadQuery};
pub use request_context::RequestContext;

pub type JsonObject = serde_json::Map<String, serde_json::Value>;
