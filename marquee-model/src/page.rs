use crate::item::ItemDetail;

/// Pages are numbered from zero on the wire and in the search state.
pub const FIRST_PAGE: u32 = 0;

/// One page of results from the paginated search endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchPage {
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Vec<ItemDetail>,
    /// `true` when this is the final page for the query.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last: bool,
}

impl SearchPage {
    pub fn new(content: Vec<ItemDetail>, last: bool) -> Self {
        Self { content, last }
    }

    pub fn has_more(&self) -> bool {
        !self.last
    }
}
