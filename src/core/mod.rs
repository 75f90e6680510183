pub mod contract;
pub mod error;
pub mod http_client;
