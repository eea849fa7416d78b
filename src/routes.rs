use axum::routing::get;
use axum::Router;

use crate::controllers::{draft_annotations, health_check, validate};

pub fn routes() -> Router {
    Router::new()
        .route(
            "/drafts/content/:uuid/annotations",
            get(draft_annotations::read)
                .put(draft_annotations::replace)
                .post(draft_annotations::add),
        )
        .route(
            "/drafts/content/:uuid/annotations/:cuuid",
            axum::routing::patch(draft_annotations::patch).delete(draft_annotations::delete),
        )
        .route("/validate", axum::routing::post(validate::validate))
        .route("/__health", get(health_check::health))
        .route("/__gtg", get(health_check::gtg))
}
