//! JSON responses for unmatched routes and methods

use crate::error::ApiError;

/// Unknown path
pub async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("method not allowed".to_string())
}
