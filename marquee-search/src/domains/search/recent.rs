//! Bounded most-recently-selected list.

use marquee_model::{ItemId, ItemSuggestion};

/// Maximum number of remembered selections.
pub const RECENT_CAPACITY: usize = 10;

/// Recently selected items, most recent first, unique by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentItems {
    items: Vec<ItemSuggestion>,
}

impl RecentItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted data, dropping repeated ids and anything past
    /// capacity. The first occurrence of an id wins.
    pub fn from_items(items: impl IntoIterator<Item = ItemSuggestion>) -> Self {
        let mut recent = Self::new();
        for item in items {
            if recent.items.len() == RECENT_CAPACITY {
                break;
            }
            if !recent.contains(item.id) {
                recent.items.push(item);
            }
        }
        recent
    }

    /// Move `item` to the front, evicting the oldest entry past capacity.
    pub fn record_selection(&mut self, item: ItemSuggestion) {
        self.items.retain(|existing| existing.id != item.id);
        self.items.insert(0, item);
        self.items.truncate(RECENT_CAPACITY);
    }

    pub fn as_suggestions(&self) -> Vec<ItemSuggestion> {
        self.items.clone()
    }

    pub fn items(&self) -> &[ItemSuggestion] {
        &self.items
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
