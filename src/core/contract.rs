use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

/// One inbound request as seen by a microservice: the raw header map and the
/// already-parsed (but untrusted) JSON body.
#[derive(Debug, Clone, Default)]
pub struct ServiceRequest {
    pub headers: HashMap<String, String>,
    pub body: Value,
}

/// A microservice maps one request to one JSON response. Implementations are
/// stateless per invocation and never fail at this boundary: every internal
/// error is encoded in the returned value as `{ok: false, error: ...}`.
#[async_trait]
pub trait Microservicio: Send + Sync {
    async fn handle(&self, request: ServiceRequest) -> Value;
}
