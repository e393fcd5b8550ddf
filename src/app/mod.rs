pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

use crate::core::title_service::TitleService;
use std::sync::Arc;

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TitleService>,
}

impl AppState {
    pub fn new(service: TitleService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
