//! Statistics reporting.

use std::path::Path;

use console::style;

use crate::export::ExportStats;

/// Print the summary of a finished export.
pub fn print_export_summary(stats: &ExportStats, output: &Path) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Export Summary:").bold());
    println!("  Items:  {}", stats.item_count);
    println!("  Likes:  {}", stats.total_likes);
    println!("  Tags:   {} distinct", stats.distinct_tags);
    println!("  Output: {}", output.display());
    println!("{}", style("═".repeat(50)).dim());
}
