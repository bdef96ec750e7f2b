use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller input was missing or malformed. Nothing was persisted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Requested resource was not found.
    #[error("{0}")]
    NotFound(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
