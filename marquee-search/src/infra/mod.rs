//! Infrastructure: HTTP access, persistence and the task plumbing that
//! connects asynchronous work back into the search domain.

pub mod api_client;
pub mod cache;
pub mod repository;
pub mod services;
pub mod task;
pub mod testing;

pub use api_client::ApiClient;
pub use task::Task;
