pub mod draft_annotations;
pub mod health_check;
pub mod validate;
