#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use bettervoice_webhook::{
    config::Config, utils::logger, webhook::TracingSink, AppContext, APP_NAME, APP_VERSION, GIT_HASH,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    bettervoice_webhook::init_env();
    let config = Config::from_env()?;

    // 初始化日志系统
    let _guard = logger::init(&config.log)?;

    info!(version = APP_VERSION, git = GIT_HASH, "Starting {}...", APP_NAME);

    let ctx = Arc::new(AppContext::new(Arc::new(TracingSink)));

    let addr = config.socket_addr();
    info!("Starting HTTP server at http://{}", addr);

    match bettervoice_webhook::web::start_server(ctx, addr, config.body_limit_bytes).await {
        Ok(_) => info!("Server stopped"),
        Err(e) => {
            tracing::error!("Server error: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
