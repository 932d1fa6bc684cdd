//! Qiita Export - export your Qiita items to a spreadsheet-friendly CSV file.
//!
//! This library fetches every item posted by the authenticated Qiita user and
//! writes them to a UTF-8 CSV file with a byte-order mark.
//!
//! # Features
//!
//! - Bearer-token authentication
//! - Pagination over all of the user's items
//! - Fixed seven-column CSV layout (ID, title, URL, dates, likes, tags)
//! - TOML configuration with CLI overrides
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use qiita_export::{export_items, ApiSettings, QiitaApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = QiitaApi::new(ApiSettings::new("your access token"))?;
//!     let items = api.fetch_all().await?;
//!     export_items(&items, Path::new("qiita_items.csv"))?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;

// Re-exports for convenience
pub use api::{ApiSettings, Item, QiitaApi, Tag};
pub use config::Config;
pub use error::{Error, Result};
pub use export::{export_items, ExportStats};
