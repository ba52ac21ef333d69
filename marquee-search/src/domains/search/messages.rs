//! Search domain messages

use marquee_model::{ItemDetail, ItemSuggestion};

use super::error::SearchError;
use super::scroll::ScrollViewport;
use super::types::{FetchTicket, InputSelection, SuggestionPage};

/// Search domain messages
#[derive(Clone, Debug)]
pub enum Message {
    // User actions
    /// Input text changed
    QueryChanged(String),
    /// Input gained focus
    InputFocused,
    /// Fetch the next page if there is one
    LoadMore,
    /// The suggestion list scrolled; may turn into `LoadMore`
    ListScrolled(ScrollViewport),
    /// Commit the input
    Select(InputSelection),
    /// Close the detail view
    DismissSelection,

    // Internal events
    /// A page request finished
    PageLoaded {
        ticket: FetchTicket,
        result: Result<SuggestionPage, SearchError>,
    },
    /// A detail request finished
    DetailLoaded {
        ticket: u64,
        suggestion: ItemSuggestion,
        result: Result<ItemDetail, SearchError>,
    },
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QueryChanged(_) => "Search::QueryChanged",
            Self::InputFocused => "Search::InputFocused",
            Self::LoadMore => "Search::LoadMore",
            Self::ListScrolled(_) => "Search::ListScrolled",
            Self::Select(_) => "Search::Select",
            Self::DismissSelection => "Search::DismissSelection",
            Self::PageLoaded { .. } => "Search::PageLoaded",
            Self::DetailLoaded { .. } => "Search::DetailLoaded",
        }
    }
}
