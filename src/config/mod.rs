//! Configuration module for qiita-export.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{AccountConfig, ApiConfig, Config, OutputConfig, DEFAULT_OUTPUT_PATH};
pub use validation::validate_config;
