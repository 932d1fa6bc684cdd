//! Qiita Export - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use qiita_export::{
    api::QiitaApi,
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Result},
    export::{export_items, ExportStats},
    output::{
        create_spinner, fetch_message, print_banner, print_config_summary, print_error,
        print_export_summary, print_info, print_success,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; user-facing progress goes through the console helpers
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !args.quiet {
        print_banner();
    }

    // Load configuration
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        if !args.quiet {
            print_info(&format!(
                "No configuration file at {}, using defaults and CLI arguments",
                args.config.display()
            ));
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    if !args.quiet {
        print_config_summary(&config.api.endpoint, config.api.per_page, config.output_path());
    }

    let api = QiitaApi::new(config.api_settings())?;

    // Fetch every page before touching the output file
    let spinner = (!args.quiet).then(|| create_spinner("Fetching items..."));
    let fetched = api
        .fetch_all_with_progress(|page, total| {
            if let Some(spinner) = &spinner {
                spinner.set_message(fetch_message(page, total));
            }
        })
        .await;
    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let items = fetched?;

    export_items(&items, config.output_path())?;

    if !args.quiet {
        print_success(&format!(
            "Exported {} items to {}",
            items.len(),
            config.output_path().display()
        ));
        print_export_summary(&ExportStats::from_items(&items), config.output_path());
    }

    Ok(())
}
