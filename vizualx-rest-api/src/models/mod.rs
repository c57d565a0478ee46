pub mod common;
pub mod sync;

// Re-export commonly used types
pub use common::{HealthResponse, ServiceInfo};
pub use sync::SyncStatusResponse;
