//! Error vocabulary shared by the remote-service seam.

use marquee_model::ItemId;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationError(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl RepositoryError {
    pub fn item_not_found(id: ItemId) -> Self {
        RepositoryError::NotFound {
            entity_type: "item".to_string(),
            id: id.to_string(),
        }
    }
}
