//! Search domain types and state management

use std::collections::HashSet;

use marquee_model::{FIRST_PAGE, ItemDetail, ItemId, ItemSuggestion};

use super::recent::RecentItems;
use super::scroll::DEFAULT_SCROLL_THRESHOLD_PX;

/// Ordered suggestion list backing the dropdown. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionStore {
    items: Vec<ItemSuggestion>,
}

impl SuggestionStore {
    /// Replace the contents, keeping the first occurrence of each id.
    pub fn replace(&mut self, items: Vec<ItemSuggestion>) {
        self.items.clear();
        self.append_unique(items);
    }

    /// Append items whose ids are not present yet. Returns how many landed.
    pub fn append_unique(&mut self, items: Vec<ItemSuggestion>) -> usize {
        let mut seen: HashSet<ItemId> =
            self.items.iter().map(|item| item.id).collect();
        let before = self.items.len();
        self.items
            .extend(items.into_iter().filter(|item| seen.insert(item.id)));
        self.items.len() - before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[ItemSuggestion] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&ItemSuggestion> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Identifies one page request. A response is applied only while its
/// generation is still current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub text: String,
    pub page: u32,
}

/// Paging state for the current query lineage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationCursor {
    pub text: String,
    /// Last page applied to the store, `None` until the first page lands.
    pub page: Option<u32>,
    pub has_more: bool,
    pub is_fetching: bool,
    pub generation: u64,
}

impl PaginationCursor {
    /// Start a new lineage for `text` and claim the first page.
    pub fn reset(&mut self, text: &str) -> FetchTicket {
        self.generation += 1;
        self.text = text.to_string();
        self.page = None;
        self.has_more = true;
        self.is_fetching = true;
        self.ticket(FIRST_PAGE)
    }

    /// Start a lineage that never fetches (blank text).
    pub fn reset_empty(&mut self, text: &str) {
        self.generation += 1;
        self.text = text.to_string();
        self.page = None;
        self.has_more = false;
        self.is_fetching = false;
    }

    /// Claim the page after the last applied one, or `None` when there is
    /// nothing to fetch or a fetch is already in flight.
    pub fn begin_next_page(&mut self) -> Option<FetchTicket> {
        if !self.has_more || self.is_fetching || self.text.trim().is_empty() {
            return None;
        }
        self.is_fetching = true;
        Some(self.ticket(self.next_page()))
    }

    pub fn next_page(&self) -> u32 {
        self.page.map_or(FIRST_PAGE, |page| page + 1)
    }

    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Record a successful response for `ticket`.
    pub fn complete(&mut self, ticket: &FetchTicket, last: bool) {
        self.page = Some(ticket.page);
        self.has_more = !last;
        self.is_fetching = false;
    }

    /// Release the in-flight flag; the same page is fetched on the next try.
    pub fn fail(&mut self) {
        self.is_fetching = false;
    }

    /// Orphan whatever is in flight and stop paging.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.has_more = false;
        self.is_fetching = false;
    }

    fn ticket(&self, page: u32) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
            text: self.text.clone(),
            page,
        }
    }
}

/// A search response already mapped to dropdown records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionPage {
    pub items: Vec<ItemSuggestion>,
    pub last: bool,
}

/// What the user committed in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSelection {
    /// Typed text that did not pick a suggestion.
    FreeText(String),
    /// A suggestion picked from the dropdown.
    Suggestion(ItemSuggestion),
}

/// Main search domain state
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Text shown in the input
    pub query: String,
    /// Suggestions shown in the dropdown
    pub store: SuggestionStore,
    pub cursor: PaginationCursor,
    pub recent: RecentItems,
    /// The dropdown currently lists recent selections rather than results
    pub showing_recent: bool,
    /// Detail of the selected item, if any
    pub selection: Option<ItemDetail>,
    /// Item whose detail is being fetched
    pub loading_detail: Option<ItemId>,
    /// Bumped per detail lookup; older responses are dropped
    pub detail_ticket: u64,
    /// Error message if the last operation failed
    pub error: Option<String>,
    pub scroll_threshold_px: f32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            store: SuggestionStore::default(),
            cursor: PaginationCursor::default(),
            recent: RecentItems::default(),
            showing_recent: false,
            selection: None,
            loading_detail: None,
            detail_ticket: 0,
            error: None,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}

impl SearchState {
    pub fn with_recent(recent: RecentItems) -> Self {
        Self {
            recent,
            ..Self::default()
        }
    }

    /// `true` when `item` is shown because it was recently selected.
    pub fn is_recent_entry(&self, item: &ItemSuggestion) -> bool {
        self.showing_recent && self.recent.contains(item.id)
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more
    }

    pub fn is_fetching(&self) -> bool {
        self.cursor.is_fetching
    }
}
