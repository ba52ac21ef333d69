//! Search domain - incremental, paginated suggestions and item selection

pub mod error;
pub mod messages;
pub mod recent;
pub mod scroll;
pub mod service;
pub mod types;
pub mod update;

use std::sync::Arc;

use crate::infra::cache::RecentStore;
use crate::infra::services::api::ApiService;

pub use self::error::SearchError;
pub use self::messages::Message;
pub use self::recent::{RECENT_CAPACITY, RecentItems};
pub use self::scroll::{DEFAULT_SCROLL_THRESHOLD_PX, ScrollViewport};
pub use self::service::SearchService;
pub use self::types::{
    FetchTicket, InputSelection, PaginationCursor, SearchState,
    SuggestionPage, SuggestionStore,
};
pub use self::update::update;

/// Search domain state container
#[derive(Debug)]
pub struct SearchDomain {
    /// Search state
    pub state: SearchState,
    /// Search service for executing searches
    pub service: Arc<SearchService>,
    /// Where the recent list is read from and written to
    pub recent_store: Arc<dyn RecentStore>,
}

impl SearchDomain {
    /// Build the domain, reading the recent list from `recent_store` once.
    pub fn new(
        api_service: Arc<dyn ApiService>,
        recent_store: Arc<dyn RecentStore>,
    ) -> Self {
        let recent = RecentItems::from_items(recent_store.load());
        log::debug!("[Search] loaded {} recent items", recent.len());

        Self {
            state: SearchState::with_recent(recent),
            service: Arc::new(SearchService::new(api_service)),
            recent_store,
        }
    }

    pub fn with_scroll_threshold(mut self, threshold_px: f32) -> Self {
        self.state.scroll_threshold_px = threshold_px;
        self
    }
}
