use std::sync::Arc;

use crate::core::contract::Microservicio;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn Microservicio>,
    pub route_name: Arc<String>,
}

impl AppState {
    pub fn new(service: Arc<dyn Microservicio>, route_name: String) -> Self {
        Self {
            service,
            route_name: Arc::new(route_name),
        }
    }
}
