//! API service trait and the HTTP-backed implementation.
//!
//! Domains hold an `Arc<dyn ApiService>` so tests can swap in scripted
//! doubles without touching the network.

use std::fmt::Debug;

use async_trait::async_trait;
use marquee_model::{ItemDetail, ItemId, SearchPage};
use reqwest::StatusCode;

use crate::infra::api_client::{ApiClient, HttpStatusError};
use crate::infra::repository::{RepositoryError, RepositoryResult};

/// Remote catalogue operations used by the search widget.
#[async_trait]
pub trait ApiService: Send + Sync + Debug {
    /// Fetch one page of results for `text`. Pages are numbered from zero.
    async fn search_page(
        &self,
        text: &str,
        page: u32,
    ) -> RepositoryResult<SearchPage>;

    /// Fetch the full record for a single item.
    async fn fetch_item(&self, id: ItemId) -> RepositoryResult<ItemDetail>;

    /// Get the base URL
    fn base_url(&self) -> &str;
}

#[async_trait]
impl ApiService for ApiClient {
    async fn search_page(
        &self,
        text: &str,
        page: u32,
    ) -> RepositoryResult<SearchPage> {
        self.search_paginated(text, page)
            .await
            .map_err(|err| map_api_error(err, None))
    }

    async fn fetch_item(&self, id: ItemId) -> RepositoryResult<ItemDetail> {
        ApiClient::fetch_item(self, id)
            .await
            .map_err(|err| map_api_error(err, Some(id)))
    }

    fn base_url(&self) -> &str {
        ApiClient::base_url(self)
    }
}

fn map_api_error(err: anyhow::Error, id: Option<ItemId>) -> RepositoryError {
    if let Some(status) = err.downcast_ref::<HttpStatusError>() {
        if status.status == StatusCode::NOT_FOUND
            && let Some(id) = id
        {
            return RepositoryError::item_not_found(id);
        }
        return RepositoryError::QueryFailed(format!("{err:#}"));
    }

    if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>()
        && reqwest_err.is_decode()
    {
        return RepositoryError::DeserializationError(format!("{err:#}"));
    }

    RepositoryError::Transport(format!("{err:#}"))
}
