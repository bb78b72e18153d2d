pub mod body;
pub mod record;
pub mod sink;

pub use body::{BodyKind, DecodedBody};
pub use record::{collect_headers, HeaderFields, WebhookLogRecord, SOURCE};
pub use sink::{MemorySink, TracingSink, WebhookSink};
