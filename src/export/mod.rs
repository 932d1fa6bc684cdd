//! Export module for writing items to disk.
//!
//! Provides:
//! - CSV export with a UTF-8 BOM for spreadsheet applications
//! - Export statistics for the console summary

pub mod csv;
pub mod stats;

pub use self::csv::{export_items, item_record, write_items, DATE_FORMAT, HEADERS, UTF8_BOM};
pub use stats::ExportStats;
