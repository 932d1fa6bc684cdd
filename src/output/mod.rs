//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Fetch progress spinner
//! - Export summary

pub mod console;
pub mod progress;
pub mod stats;

pub use self::console::{
    print_banner, print_config_summary, print_error, print_info, print_success,
};
pub use progress::{create_spinner, fetch_message};
pub use stats::print_export_summary;
