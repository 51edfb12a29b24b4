pub mod schema;

pub use schema::{ApprovalsConfig, Config, ObservabilityConfig, ServiceConfig};
