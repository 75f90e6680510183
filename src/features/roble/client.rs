use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::roble::dto::ReadTableArgs;
use crate::features::roble::service::{RobleError, TableReader};

/// HTTP client for the Roble database read endpoint. One GET per request,
/// bounded by the configured timeout, never retried.
pub struct RobleClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl RobleClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, AppError> {
        let http_client = build_http_client(config.roble_timeout_secs)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            base_url: config.roble_base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }
}

#[async_trait]
impl TableReader for RobleClient {
    async fn read_table(&self, args: &ReadTableArgs) -> Result<Vec<Value>, RobleError> {
        let mut url = Url::parse(&format!("{}/{}/read", self.base_url, args.db_name))
            .map_err(|err| RobleError::Unexpected(format!("invalid read url: {err}")))?;
        url.query_pairs_mut()
            .append_pair("tableName", &args.table_name);

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&args.access_token)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            let text = response.text().await.unwrap_or_default();
            // Best effort: show the upstream body as JSON when it parses.
            let body = match serde_json::from_str::<Value>(&text) {
                Ok(parsed) => parsed.to_string(),
                Err(_) => text,
            };
            tracing::warn!(status, "roble read failed");
            return Err(RobleError::Upstream { status, body });
        }

        match response.json::<Value>().await {
            Ok(Value::Array(records)) => Ok(records),
            Ok(_) | Err(_) => Err(RobleError::UnexpectedShape),
        }
    }
}

fn classify_transport_error(err: reqwest::Error) -> RobleError {
    if err.is_timeout() {
        RobleError::Timeout
    } else {
        RobleError::Network(err.to_string())
    }
}
