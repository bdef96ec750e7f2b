pub use self::errors::{ServiceError, ServiceResult};

pub mod categories;
pub mod errors;
pub mod offers;

/// Unwrap an identifier supplied by the caller or fail with
/// [`ServiceError::InvalidArgument`].
fn require_id<T>(id: Option<T>, what: &str) -> ServiceResult<T> {
    id.ok_or_else(|| {
        log::debug!("Rejected request without {what} id");
        ServiceError::InvalidArgument(format!("{what} id cannot be empty"))
    })
}

/// Treat a missing or empty string filter as "no filter given".
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
