use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}
