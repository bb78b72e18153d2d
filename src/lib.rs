pub mod config;
pub mod utils;
pub mod web;
pub mod webhook;

use std::sync::Arc;
use webhook::WebhookSink;

pub const APP_NAME: &str = "bettervoice-webhook";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = env!("GIT_HASH");

#[derive(Clone)]
pub struct AppContext {
    pub sink: Arc<dyn WebhookSink>,
}

impl AppContext {
    pub fn new(sink: Arc<dyn WebhookSink>) -> Self {
        Self { sink }
    }
}

/// Loads `.env` from the working directory. Variables already set in the
/// process take precedence.
pub fn init_env() {
    dotenv::dotenv().ok();
}
