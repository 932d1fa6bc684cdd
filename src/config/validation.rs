//! Configuration validation logic.

use std::path::Path;

use regex::Regex;
use url::Url;

use crate::api::MAX_PER_PAGE;
use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_token(&config.account.access_token)?;
    validate_endpoint(&config.api.endpoint)?;
    validate_per_page(config.api.per_page)?;
    validate_timeout(config.api.timeout_seconds)?;
    validate_output_path(config.output_path())?;

    Ok(())
}

/// Validate the access token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(Error::MissingConfig(
            "access_token (pass --token or set QIITA_ACCESS_TOKEN)".to_string(),
        ));
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your Qiita access token."
                .to_string(),
        });
    }

    // Sent verbatim in the Authorization header
    let token_pattern = Regex::new(r"^[\x21-\x7E]+$").unwrap();
    if !token_pattern.is_match(token) {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token must be printable ASCII without whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validate the API endpoint.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "endpoint".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.query().is_some() {
        return Err(Error::ConfigValidation {
            field: "endpoint".to_string(),
            message: "Endpoint must not contain a query string".to_string(),
        });
    }

    Ok(())
}

/// Validate the page size.
pub fn validate_per_page(per_page: u32) -> Result<()> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(Error::ConfigValidation {
            field: "per_page".to_string(),
            message: format!(
                "Must be between 1 and {} (got {})",
                MAX_PER_PAGE, per_page
            ),
        });
    }

    Ok(())
}

/// Validate the request timeout.
pub fn validate_timeout(timeout_seconds: u64) -> Result<()> {
    if timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    Ok(())
}

/// Validate the output path.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::MissingConfig("output path".to_string()));
    }

    if path.is_dir() {
        return Err(Error::ConfigValidation {
            field: "output".to_string(),
            message: format!("{} is a directory", path.display()),
        });
    }

    Ok(())
}
