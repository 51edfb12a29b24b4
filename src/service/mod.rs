pub mod client;
pub mod http_client;
pub mod traits;
pub mod types;

pub use client::HttpServiceClient;
pub use http_client::build_service_client;
pub use traits::{ServiceClient, ServiceFuture};
pub use types::Acknowledgement;
