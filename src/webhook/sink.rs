use std::sync::Mutex;
use tracing::info;

use super::record::WebhookLogRecord;

/// Destination for webhook log records. Shared by all requests.
pub trait WebhookSink: Send + Sync {
    fn emit(&self, record: &WebhookLogRecord);
}

/// Writes each record as one INFO event on the `bettervoice-webhook` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WebhookSink for TracingSink {
    fn emit(&self, record: &WebhookLogRecord) {
        info!(
            target: crate::APP_NAME,
            source = record.source,
            client_ip = record.client_ip.as_deref(),
            headers = %record.headers_json(),
            body_type = record.body_type.as_str(),
            body = record.body.as_str(),
            "Received webhook event"
        );
    }
}

/// Keeps records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<WebhookLogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<WebhookLogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl WebhookSink for MemorySink {
    fn emit(&self, record: &WebhookLogRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record.clone());
    }
}
