pub mod title_service;

pub use crate::domain::model::{ChangeEvent, DeletedTitle, Title};
pub use crate::domain::ports::{BackupBucket, EventQueue, StoredTitle, TitleStore};
pub use crate::utils::error::Result;
