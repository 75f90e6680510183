use std::env;

use crate::config::dto::{AppConfig, HandlerKind};
use crate::core::error::AppError;

const DEFAULT_ROBLE_BASE_URL: &str = "https://roble-api.openlab.uninorte.edu.co/database";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let route_name = env::var("MICROSERVICIO_NAME").unwrap_or_else(|_| "default".to_string());

    let handler = env::var("MICROSERVICIO_HANDLER").unwrap_or_else(|_| "calculadora".to_string());
    let handler = match handler.trim().to_lowercase().as_str() {
        "calculadora" => HandlerKind::Calculadora,
        "roble" => HandlerKind::Roble,
        other => {
            return Err(AppError::configuration(format!(
                "invalid MICROSERVICIO_HANDLER: {other} (expected calculadora or roble)"
            )));
        }
    };

    let roble_base_url =
        env::var("ROBLE_BASE_URL").unwrap_or_else(|_| DEFAULT_ROBLE_BASE_URL.to_string());
    let roble_timeout_secs = parse_u64_env("ROBLE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

    Ok(AppConfig {
        port,
        route_name,
        handler,
        roble_base_url,
        roble_timeout_secs,
    })
}

fn parse_u64_env(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}
