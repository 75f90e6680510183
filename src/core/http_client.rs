use std::time::Duration;

use reqwest::Client;

pub fn build_http_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent("microservicio-host/1.0")
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}
