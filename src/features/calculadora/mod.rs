pub mod dto;
pub mod service;

pub use dto::CalcResponse;
pub use service::{CalcError, CalculadoraService};
