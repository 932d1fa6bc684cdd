//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Qiita item exporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "qiita-export",
    version,
    about = "Export your Qiita items to a CSV file",
    long_about = "Fetches every item posted by the authenticated Qiita user and writes them to a\n\
                  CSV file that spreadsheet applications open without mojibake."
)]
pub struct Args {
    /// Qiita personal access token.
    #[arg(short, long, env = "QIITA_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output CSV file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// API base URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Items requested per page (1-100).
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Hide banner, progress and summary.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(token) = &self.token {
            config.account.access_token = token.clone();
        }

        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }

        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }

        if let Some(per_page) = self.per_page {
            config.api.per_page = per_page;
        }

        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_only_given_values() {
        let args = Args::try_parse_from([
            "qiita-export",
            "--token",
            "cli-token",
            "--per-page",
            "25",
        ])
        .unwrap();

        let mut config = Config::from_toml(
            r#"
            [account]
            access_token = "file-token"
            [output]
            path = "from-file.csv"
            "#,
        )
        .unwrap();
        args.merge_into_config(&mut config);

        assert_eq!(config.account.access_token, "cli-token");
        assert_eq!(config.api.per_page, 25);
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.output.path, PathBuf::from("from-file.csv"));
    }

    #[test]
    fn test_output_and_flags() {
        let args = Args::try_parse_from([
            "qiita-export",
            "-o",
            "out.csv",
            "-q",
            "--timeout",
            "10",
            "--endpoint",
            "http://localhost:3000/api/v2",
        ])
        .unwrap();

        assert!(args.quiet);
        assert!(!args.debug);
        assert_eq!(args.config, PathBuf::from("config.toml"));

        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert_eq!(config.output.path, PathBuf::from("out.csv"));
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.api.endpoint, "http://localhost:3000/api/v2");
    }
}
