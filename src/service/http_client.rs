use reqwest::Client;
use std::time::Duration;

/// Shared reqwest client. No request timeout is set.
pub fn build_service_client() -> Client {
    Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .build()
        .unwrap_or_else(|_| Client::new())
}
