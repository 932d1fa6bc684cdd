//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Qiita Export                                      ║
║     Your Qiita items as a spreadsheet-ready CSV       ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(endpoint: &str, per_page: u32, output: &Path) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Endpoint: {}", endpoint);
    println!("  Per page: {}", per_page);
    println!("  Output:   {}", output.display());
    println!();
}
