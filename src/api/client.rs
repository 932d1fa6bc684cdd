//! Qiita API HTTP client.

use std::fmt;
use std::time::Duration;

use reqwest::{header, Client};

use crate::api::types::Item;
use crate::error::{Error, Result};

/// Qiita API v2 base URL.
pub const API_BASE: &str = "https://qiita.com/api/v2";

/// Largest page size the API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Timeout applied to every page request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to build a [`QiitaApi`].
#[derive(Clone)]
pub struct ApiSettings {
    pub access_token: String,
    pub endpoint: String,
    pub per_page: u32,
    pub timeout: Duration,
}

impl ApiSettings {
    /// Settings for the public API with default paging and timeout.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            endpoint: API_BASE.to_string(),
            per_page: MAX_PER_PAGE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("access_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("per_page", &self.per_page)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for the authenticated user's items.
pub struct QiitaApi {
    client: Client,
    endpoint: String,
    per_page: u32,
}

impl QiitaApi {
    /// Create a new API client.
    pub fn new(settings: ApiSettings) -> Result<Self> {
        check_per_page(settings.per_page)?;

        let client = Client::builder()
            .default_headers(build_headers(&settings.access_token)?)
            .timeout(settings.timeout)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            per_page: settings.per_page,
        })
    }

    /// Page size used by [`QiitaApi::fetch_all`].
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Fetch a single page of the authenticated user's items.
    pub async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<Item>> {
        if page == 0 {
            return Err(Error::InvalidRequest("page numbers start at 1".into()));
        }
        check_per_page(per_page)?;

        let url = format!("{}/authenticated_user/items", self.endpoint);
        tracing::debug!("GET {}?page={}&per_page={}", url, page, per_page);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(|source| Error::Transport { page, source })?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            let body = error_body(response.text().await);
            tracing::error!("API error response: {}", body);
            return Err(Error::Api {
                page,
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| Error::Transport { page, source })?;

        let items: Vec<Item> =
            serde_json::from_str(&text).map_err(|source| Error::Decode { page, source })?;
        tracing::debug!("Page {} returned {} items", page, items.len());

        Ok(items)
    }

    /// Fetch every item, page by page, until a short page is returned.
    pub async fn fetch_all(&self) -> Result<Vec<Item>> {
        self.fetch_all_with_progress(|_, _| {}).await
    }

    /// Like [`QiitaApi::fetch_all`], calling `on_page(page, total)` after each page.
    pub async fn fetch_all_with_progress<F>(&self, mut on_page: F) -> Result<Vec<Item>>
    where
        F: FnMut(u32, usize),
    {
        let per_page = self.per_page;
        let mut items = Vec::new();
        let mut page = 1;

        tracing::info!("Fetching items ({} per page)...", per_page);

        loop {
            let batch = self.fetch_page(page, per_page).await?;
            let received = batch.len();

            if received > per_page as usize {
                return Err(Error::PageOverflow {
                    page,
                    requested: per_page,
                    received,
                });
            }

            items.extend(batch);
            on_page(page, items.len());

            if received < per_page as usize {
                break;
            }
            page += 1;
        }

        tracing::info!("Fetched {} items in {} requests", items.len(), page);

        Ok(items)
    }
}

/// Build the headers sent with every request.
fn build_headers(token: &str) -> Result<header::HeaderMap> {
    let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token contains characters that cannot be sent in a header".to_string(),
        }
    })?;
    auth.set_sensitive(true);

    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth);
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}

/// Body of a non-success response, noting when it could not be read.
fn error_body(read: reqwest::Result<String>) -> String {
    read.unwrap_or_else(|e| {
        tracing::warn!("Failed to read error response body: {}", e);
        format!("<unreadable body: {}>", e)
    })
}

fn check_per_page(per_page: u32) -> Result<()> {
    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(Error::InvalidRequest(format!(
            "per_page must be between 1 and {} (got {})",
            MAX_PER_PAGE, per_page
        )));
    }
    Ok(())
}
