mod init_tracing;
mod reference_sanitizer;
mod request_id;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use reference_sanitizer::sanitize_reference;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;
