use thiserror::Error;

use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    StorageFailure {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
}

