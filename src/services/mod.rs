pub mod annotations_client;
pub mod augmenter;
pub mod canonicalizer;
pub mod concept_resolver;
pub mod draft_store;
pub mod ids;
pub mod merge_engine;
pub mod predicate_mapper;
pub mod validation;

pub use annotations_client::AnnotationsClient;
pub use augmenter::augment;
pub use concept_resolver::ConceptResolver;
pub use draft_store::DraftStoreClient;
pub use merge_engine::MergeEngine;
pub use validation::Validator;
