pub mod dto;
pub mod loader;

pub use dto::{AppConfig, HandlerKind};
pub use loader::load_config;
