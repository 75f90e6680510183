use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use microservicio_host::config::{HandlerKind, load_config};
use microservicio_host::core::contract::Microservicio;
use microservicio_host::core::error::AppError;
use microservicio_host::features::calculadora::CalculadoraService;
use microservicio_host::features::roble::{RobleClient, RobleService};
use microservicio_host::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);

    let service: Arc<dyn Microservicio> = match config.handler {
        HandlerKind::Calculadora => Arc::new(CalculadoraService::new()),
        HandlerKind::Roble => {
            let client = Arc::new(RobleClient::new(config.clone())?);
            Arc::new(RobleService::new(client))
        }
    };

    let app_state = AppState::new(service, config.route_name.clone());
    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        %addr,
        route = %config.route_name,
        handler = ?config.handler,
        "starting microservice host"
    );
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
