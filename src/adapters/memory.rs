//! In-process adapters for local runs and tests.
//!
//! The store, recording queue and bucket can be switched into a failing mode
//! so partial-failure paths can be exercised without a real outage.

use crate::domain::model::{ChangeEvent, Title};
use crate::domain::ports::{BackupBucket, EventQueue, StoredTitle, TitleStore};
use crate::utils::error::{Result, TitlesError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

#[derive(Debug, Default)]
pub struct InMemoryTitleStore {
    items: RwLock<HashMap<String, StoredTitle>>,
    failing: AtomicBool,
}

impl InMemoryTitleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self, operation: &'static str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TitlesError::store(operation, "store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl TitleStore for InMemoryTitleStore {
    async fn put_title(&self, title: &Title) -> Result<()> {
        self.check("put_item")?;
        let mut items = self
            .items
            .write()
            .map_err(|e| TitlesError::store("put_item", e))?;
        items.insert(
            title.isbn.clone(),
            StoredTitle {
                name: title.name.clone(),
                description: title.description.clone(),
            },
        );
        Ok(())
    }

    async fn delete_title(&self, isbn: &str) -> Result<()> {
        self.check("delete_item")?;
        let mut items = self
            .items
            .write()
            .map_err(|e| TitlesError::store("delete_item", e))?;
        items.remove(isbn);
        Ok(())
    }

    async fn get_title(&self, isbn: &str) -> Result<Option<StoredTitle>> {
        self.check("get_item")?;
        let items = self
            .items
            .read()
            .map_err(|e| TitlesError::store("get_item", e))?;
        Ok(items.get(isbn).cloned())
    }
}

/// Keeps every sent message body, in send order.
#[derive(Debug, Default)]
pub struct RecordingEventQueue {
    messages: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl RecordingEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Sent messages decoded back into events; undecodable bodies are skipped.
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.messages()
            .iter()
            .filter_map(|body| serde_json::from_str(body).ok())
            .collect()
    }
}

#[async_trait]
impl EventQueue for RecordingEventQueue {
    async fn publish(&self, event: &ChangeEvent) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TitlesError::queue("send_message", "queue unavailable"));
        }
        let body = event.to_message_body()?;
        self.messages
            .lock()
            .map_err(|e| TitlesError::queue("send_message", e))?
            .push(body);
        Ok(())
    }

    async fn probe_receive(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TitlesError::queue("receive_message", "queue unavailable"));
        }
        Ok(())
    }
}

/// Logs each change event and drops it; the server's `memory` backend uses
/// this so nothing accumulates over the process lifetime.
#[derive(Debug, Default)]
pub struct LoggingEventQueue;

impl LoggingEventQueue {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventQueue for LoggingEventQueue {
    async fn publish(&self, event: &ChangeEvent) -> Result<()> {
        let body = event.to_message_body()?;
        tracing::info!(event_type = event.event_type(), body = %body, "change event discarded");
        Ok(())
    }

    async fn probe_receive(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct InMemoryBackupBucket {
    reachable: AtomicBool,
}

impl InMemoryBackupBucket {
    pub fn new() -> Self {
        Self {
            reachable: AtomicBool::new(true),
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }
}

impl Default for InMemoryBackupBucket {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackupBucket for InMemoryBackupBucket {
    async fn probe_get_object(&self) -> Result<()> {
        if !self.reachable.load(Ordering::SeqCst) {
            return Err(TitlesError::object_store("bucket unreachable"));
        }
        Ok(())
    }
}
