use thiserror::Error;

use crate::infra::repository::RepositoryError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Server error resulting in failed search: {0}")]
    Server(String),
    #[error("No matches found: {0}")]
    NotFound(String),
    #[error("Malformed response from server: {0}")]
    Decode(String),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Failed to persist recent items: {0}")]
    Persist(String),
}

impl From<RepositoryError> for SearchError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity_type, id } => {
                SearchError::NotFound(format!("{entity_type} {id}"))
            }
            RepositoryError::QueryFailed(msg) => SearchError::Server(msg),
            RepositoryError::DeserializationError(msg) => {
                SearchError::Decode(msg)
            }
            RepositoryError::Transport(msg) => SearchError::Transport(msg),
        }
    }
}
