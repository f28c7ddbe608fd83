use crate::errors::ApiError;

/// Fallback for every path other than `/` and `/health`
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
