use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::info;

pub mod handlers;

use crate::AppContext;

/// Any origin, method and header, with credentials. A literal `*` cannot be
/// combined with credentials, so the request's own values are echoed back.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Request bodies are unbounded unless `body_limit_bytes` is given.
pub fn app(ctx: Arc<AppContext>, body_limit_bytes: Option<usize>) -> Router {
    let body_limit = match body_limit_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    handlers::router(ctx)
        .layer(body_limit)
        .layer(cors_layer())
}

pub async fn start_server(ctx: Arc<AppContext>, addr: SocketAddr, body_limit_bytes: Option<usize>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app(ctx, body_limit_bytes)).await
}

pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
