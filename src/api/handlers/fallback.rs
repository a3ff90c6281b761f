use crate::error::ApiError;

/// Anything not in the route table.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
