use crate::domain::model::{ChangeEvent, Title};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable key-value storage for titles, keyed by isbn.
#[async_trait]
pub trait TitleStore: Send + Sync {
    /// Unconditional overwrite of the whole record.
    async fn put_title(&self, title: &Title) -> Result<()>;
    /// Deleting an absent key is not an error.
    async fn delete_title(&self, isbn: &str) -> Result<()>;
    async fn get_title(&self, isbn: &str) -> Result<Option<StoredTitle>>;
}

/// Attributes read back from the store, without the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTitle {
    pub name: String,
    pub description: String,
}

#[async_trait]
pub trait EventQueue: Send + Sync {
    async fn publish(&self, event: &ChangeEvent) -> Result<()>;
    /// Receives at most one message without deleting it.
    async fn probe_receive(&self) -> Result<()>;
}

#[async_trait]
pub trait BackupBucket: Send + Sync {
    async fn probe_get_object(&self) -> Result<()>;
}
