use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {field} must not be empty")]
    Validation { field: &'static str },

    #[error("duplicate song id: {id}")]
    DuplicateId { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
