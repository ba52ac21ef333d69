use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use marquee_model::{ItemDetail, ItemId, SearchPage};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const SEARCH_PATH: &str = "/api/movies/searchPaginated";
const ITEM_PATH: &str = "/api/movies";

/// Non-success HTTP status returned by the catalogue service.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{url} responded with {status}")]
pub struct HttpStatusError {
    pub status: StatusCode,
    pub url: String,
}

/// Thin HTTP client for the catalogue's search and detail endpoints.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a client with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let raw = base_url.into();
        let base_url = raw.trim().trim_end_matches('/').to_string();
        if base_url != raw {
            log::warn!(
                "[ApiClient] Normalized base URL from '{}' to '{}'",
                raw,
                base_url
            );
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    /// Build an absolute URL for a service path.
    pub fn build_url(&self, path: impl AsRef<str>) -> String {
        let p = path.as_ref();
        if p.starts_with("http://") || p.starts_with("https://") {
            return p.to_string();
        }
        format!("{}/{}", self.base_url, p.trim_start_matches('/'))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/movies/searchPaginated?searchText=<text>&page=<page>`
    pub async fn search_paginated(
        &self,
        text: &str,
        page: u32,
    ) -> Result<SearchPage> {
        let url = self.build_url(SEARCH_PATH);
        let page_param = page.to_string();
        let request = self
            .client
            .get(&url)
            .query(&[("searchText", text), ("page", page_param.as_str())]);

        self.execute_request(request, &url).await.with_context(|| {
            format!("search for '{}' page {} failed", text, page)
        })
    }

    /// `GET /api/movies/{id}`
    pub async fn fetch_item(&self, id: ItemId) -> Result<ItemDetail> {
        let url = self.build_url(format!("{}/{}", ITEM_PATH, id));
        let request = self.client.get(&url);

        self.execute_request(request, &url)
            .await
            .with_context(|| format!("detail lookup for item {} failed", id))
    }

    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T> {
        debug!("[ApiClient] GET {}", url);
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.json::<T>().await?;
                Ok(body)
            }
            status => Err(HttpStatusError {
                status,
                url: url.to_string(),
            }
            .into()),
        }
    }
}
