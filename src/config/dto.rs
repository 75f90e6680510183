use serde::Deserialize;

/// Which microservice this process hosts. One handler per process, selected
/// once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerKind {
    Calculadora,
    Roble,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub route_name: String,
    pub handler: HandlerKind,
    pub roble_base_url: String,
    pub roble_timeout_secs: u64,
}
