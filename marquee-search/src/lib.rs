//! Marquee search library
//!
//! The incremental search widget core: a paginated, race-safe suggestion
//! list, a recently-selected cache and the detail lookup for a chosen item.
//! The `marquee` binary in `src/main.rs` is a small console front end over
//! the same surfaces.
//!
//! Notes
//! - State changes only happen in [`domains::search::update`]; network work
//!   comes back as [`infra::Task`] futures driven by [`app::SearchRuntime`].
//! - The library is exposed mainly to enable testing and reuse by other
//!   front ends.

pub mod app;
pub mod domains;
pub mod infra;
