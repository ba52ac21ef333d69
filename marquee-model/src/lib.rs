//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod ids;
pub mod item;
#[cfg(feature = "serde")]
pub mod list_field;
pub mod page;

// Intentionally curated re-exports for downstream consumers.
pub use ids::ItemId;
pub use item::{ItemDetail, ItemSuggestion};
#[cfg(feature = "serde")]
pub use list_field::decode_list_field;
pub use page::{FIRST_PAGE, SearchPage};
