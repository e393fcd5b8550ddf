// Adapters layer: concrete implementations of the domain ports.

pub mod aws;
pub mod dynamodb;
pub mod memory;
pub mod s3;
pub mod sqs;

use crate::config::{AppConfig, Backend};
use crate::core::title_service::TitleService;
use std::sync::Arc;

/// Builds the service for the configured backend. Called once per process.
pub async fn build_service(config: &AppConfig) -> TitleService {
    match config.server.backend {
        Backend::Aws => aws::AwsClients::load(config).await.into_service(config),
        Backend::Memory => {
            tracing::warn!("Using in-memory backend; titles are lost on exit");
            TitleService::new(
                Arc::new(memory::InMemoryTitleStore::new()),
                Arc::new(memory::LoggingEventQueue::new()),
                Arc::new(memory::InMemoryBackupBucket::new()),
            )
        }
    }
}
