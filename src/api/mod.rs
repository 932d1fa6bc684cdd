//! Qiita API module.
//!
//! This module provides:
//! - HTTP client for the authenticated user's items
//! - Pagination over every page of results
//! - API response types

pub mod client;
pub mod types;

pub use client::{ApiSettings, QiitaApi, API_BASE, DEFAULT_TIMEOUT, MAX_PER_PAGE};
pub use types::*;
