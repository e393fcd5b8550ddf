pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{routes::create_titles_router, server::TitlesServer, AppState};
pub use config::{AppConfig, Backend};
pub use core::title_service::TitleService;
pub use domain::model::{ChangeEvent, DeletedTitle, Title};
pub use utils::error::{Result, TitlesError};
