//! Service abstractions the domains talk to.

pub mod api;

pub use api::ApiService;
