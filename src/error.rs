//! Error types for the qiita-export application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    // Client setup errors
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Fetch errors
    #[error("Request for page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error on page {page}: HTTP {status}: {body}")]
    Api { page: u32, status: u16, body: String },

    #[error("Page {page} returned {received} items, more than the {requested} requested")]
    PageOverflow {
        page: u32,
        requested: u32,
        received: usize,
    },

    #[error("Failed to decode page {page}: {source}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    // Export errors
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to export {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    /// Whether the error came from talking to the remote API.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. }
                | Error::Api { .. }
                | Error::PageOverflow { .. }
                | Error::Decode { .. }
        )
    }

    /// Whether the error belongs to configuration handling.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_)
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            exit_codes::CONFIG_ERROR
        } else if self.is_api_error() {
            exit_codes::API_ERROR
        } else if matches!(self, Error::Io { .. } | Error::Export { .. }) {
            exit_codes::EXPORT_ERROR
        } else {
            exit_codes::UNEXPECTED_ERROR
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const EXPORT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_exit_codes_by_category() {
        let api = Error::Api {
            page: 1,
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(api.exit_code(), exit_codes::API_ERROR);

        let missing = Error::MissingConfig("access_token".into());
        assert_eq!(missing.exit_code(), exit_codes::CONFIG_ERROR);

        let io = Error::Io {
            action: "create",
            path: PathBuf::from("/nope/out.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(io.exit_code(), exit_codes::EXPORT_ERROR);
    }

    #[test]
    fn test_source_chain_is_preserved() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = Error::Decode {
            page: 3,
            source: json_err,
        };

        assert!(err.to_string().contains("page 3"));
        let source = err.source().expect("decode error keeps its source");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }
}
