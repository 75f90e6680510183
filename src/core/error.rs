use thiserror::Error;

/// Startup-time failures. Handler-level errors never use this type: they are
/// reported in-band inside the JSON response with `ok: false`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }
}
