use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{dto::ErrorResponse, routes::json_response};

pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Encoding(String),
}

/// Convert our custom errors to HTTP responses
///
/// `NotFound` is the only structured error body the service emits.
/// An encoding failure cannot be reported as JSON (serialization already
/// failed once), so it falls back to a plain-text 500.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => {
                match json_response(StatusCode::NOT_FOUND, &ErrorResponse::not_found()) {
                    Ok(response) => response,
                    Err(e) => e.into_response(),
                }
            }
            ApiError::Encoding(msg) => {
                error!("Error encoding JSON: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    INTERNAL_SERVER_ERROR,
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn not_found_renders_structured_json() {
        let response = ApiError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "error": "Not Found",
                "message": "Endpoint does not exist"
            })
        );
    }

    #[tokio::test]
    async fn encoding_failure_is_plain_text_500() {
        let response = ApiError::Encoding("boom".into()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], INTERNAL_SERVER_ERROR.as_bytes());
    }
}
