use axum::{
    body::Bytes,
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::webhook::{collect_headers, DecodedBody, WebhookLogRecord};
use crate::AppContext;

pub fn webhook_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/webhook", post(receive_webhook))
        .with_state(ctx)
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
    pub status: &'static str,
}

impl WebhookAck {
    pub fn ok() -> Self {
        Self {
            received: true,
            status: "ok",
        }
    }
}

/// Logs one record for the delivery and always answers 200.
pub async fn receive_webhook(
    State(ctx): State<Arc<AppContext>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let client_ip = connect_info.map(|ConnectInfo(addr)| addr.ip().to_string());
    let body = DecodedBody::decode(body);

    let record = WebhookLogRecord::new(client_ip, collect_headers(&headers), &body);
    ctx.sink.emit(&record);

    (StatusCode::OK, Json(WebhookAck::ok()))
}
