use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ValidationError;
use crate::ports::StoreError;

#[derive(Debug, Error)]
pub enum TaskflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, TaskflowError>;
