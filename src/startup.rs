use axum::extract::Extension;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::context::AppContext;
use crate::cors::cors_layer;
use crate::routes::routes;
use crate::shutdown;

const MAX_CONCURRENT_REQUESTS: usize = 256;

pub async fn run(listener: TcpListener, settings: &Settings, ctx: AppContext) -> std::io::Result<()> {
    let app = routes().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
            .layer(cors_layer(settings))
            .layer(Extension(ctx)),
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown::signal())
        .await
}
