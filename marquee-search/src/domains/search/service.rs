//! Search service for executing server-backed queries

use std::sync::Arc;
use std::time::Instant;

use marquee_model::{ItemDetail, ItemId, ItemSuggestion};

use crate::infra::services::api::ApiService;

use super::error::SearchError;
use super::types::SuggestionPage;

/// Thin domain-facing wrapper over the remote catalogue.
#[derive(Debug)]
pub struct SearchService {
    api_service: Arc<dyn ApiService>,
}

impl SearchService {
    pub fn new(api_service: Arc<dyn ApiService>) -> Self {
        Self { api_service }
    }

    pub fn base_url(&self) -> &str {
        self.api_service.base_url()
    }

    /// Fetch one page of suggestions for `query`.
    pub async fn search_page(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SuggestionPage, SearchError> {
        let start = Instant::now();
        let result = self.api_service.search_page(query, page).await;
        let elapsed = start.elapsed();

        match result {
            Ok(response) => {
                log::debug!(
                    "[Search] '{}' page {} -> {} results (last={}) in {:?}",
                    query,
                    page,
                    response.content.len(),
                    response.last,
                    elapsed
                );
                Ok(SuggestionPage {
                    items: response
                        .content
                        .into_iter()
                        .map(ItemSuggestion::from)
                        .collect(),
                    last: response.last,
                })
            }
            Err(err) => {
                log::warn!(
                    "[Search] '{}' page {} failed after {:?}: {}",
                    query,
                    page,
                    elapsed,
                    err
                );
                Err(err.into())
            }
        }
    }

    pub async fn fetch_item(&self, id: ItemId) -> Result<ItemDetail, SearchError> {
        let start = Instant::now();
        let result = self.api_service.fetch_item(id).await;
        log::debug!(
            "[Search] detail for item {} finished in {:?} (ok={})",
            id,
            start.elapsed(),
            result.is_ok()
        );
        result.map_err(SearchError::from)
    }
}

#[cfg(test)]
mod tests {
    use marquee_model::SearchPage;

    use super::*;
    use crate::infra::repository::RepositoryError;
    use crate::infra::testing::ScriptedApiService;

    #[tokio::test]
    async fn maps_details_to_suggestions() {
        let api = ScriptedApiService::default();
        let mut with_thumb = ItemDetail::new(2, "Blade Runner");
        with_thumb.thumbnail_url = Some("br.jpg".to_string());
        with_thumb.genres = Some(r#"["Sci-Fi"]"#.to_string());
        api.respond_search(
            "blade",
            0,
            Ok(SearchPage::new(vec![with_thumb, ItemDetail::new(3, "Blade")], true)),
        );
        let service = SearchService::new(Arc::new(api));

        let page = service.search_page("blade", 0).await.expect("page");

        assert!(page.last);
        assert_eq!(
            page.items,
            vec![
                ItemSuggestion::new(2, "Blade Runner").with_thumbnail("br.jpg"),
                ItemSuggestion::new(3, "Blade"),
            ]
        );
    }

    #[tokio::test]
    async fn repository_errors_become_search_errors() {
        let api = ScriptedApiService::default();
        api.respond_item(ItemId(9), Err(RepositoryError::item_not_found(ItemId(9))));
        let service = SearchService::new(Arc::new(api));

        let err = service.fetch_item(ItemId(9)).await.expect_err("missing");

        assert_eq!(err, SearchError::NotFound("item 9".to_string()));
    }
}
