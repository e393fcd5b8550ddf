use crate::core::{BackupBucket, ChangeEvent, EventQueue, Result, Title, TitleStore};
use crate::utils::error::TitlesError;
use std::sync::Arc;

/// The title synchronization flow: store mutation first, then the change event.
///
/// A failed publish after a successful store write is surfaced as an error and
/// is not compensated; the store keeps the mutation.
#[derive(Clone)]
pub struct TitleService {
    store: Arc<dyn TitleStore>,
    queue: Arc<dyn EventQueue>,
    backups: Arc<dyn BackupBucket>,
}

impl TitleService {
    pub fn new(
        store: Arc<dyn TitleStore>,
        queue: Arc<dyn EventQueue>,
        backups: Arc<dyn BackupBucket>,
    ) -> Self {
        Self {
            store,
            queue,
            backups,
        }
    }

    pub async fn put_title(&self, title: Title) -> Result<()> {
        if title.isbn.trim().is_empty() {
            return Err(TitlesError::ValidationError {
                message: "isbn must not be empty".to_string(),
            });
        }

        self.store.put_title(&title).await?;
        tracing::debug!(isbn = %title.isbn, "title written to store");

        let isbn = title.isbn.clone();
        self.queue.publish(&ChangeEvent::put(title)).await?;
        tracing::info!(isbn = %isbn, "title upserted");

        Ok(())
    }

    pub async fn delete_title(&self, isbn: &str) -> Result<()> {
        self.store.delete_title(isbn).await?;
        tracing::debug!(isbn = %isbn, "title removed from store");

        self.queue.publish(&ChangeEvent::delete(isbn)).await?;
        tracing::info!(isbn = %isbn, "title deleted");

        Ok(())
    }

    /// The returned isbn is the requested key, not a value read from the store.
    pub async fn get_title(&self, isbn: &str) -> Result<Option<Title>> {
        let found = self.store.get_title(isbn).await?;

        Ok(found.map(|stored| Title {
            isbn: isbn.to_string(),
            name: stored.name,
            description: stored.description,
        }))
    }

    pub async fn check_queue(&self) -> Result<()> {
        tracing::debug!("probing queue with a single receive");
        self.queue.probe_receive().await
    }

    pub async fn check_backup_bucket(&self) -> Result<()> {
        tracing::debug!("probing backup bucket");
        self.backups.probe_get_object().await
    }
}
