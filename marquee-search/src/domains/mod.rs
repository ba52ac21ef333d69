//! Domains: the search state machine and the detail view model.

pub mod detail;
pub mod search;
