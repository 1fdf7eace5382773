use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Malformed upstream response: {0}")]
    DeserializationError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "NotFound", msg)
            }
            ApiError::UpstreamError(msg) => {
                tracing::error!("Upstream error: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "UpstreamError", msg)
            }
            ApiError::DeserializationError(msg) => {
                tracing::error!("Malformed upstream response: {}", msg);
                (StatusCode::BAD_GATEWAY, "DeserializationError", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_variant() {
        let cases = [
            (
                ApiError::NotFound("chat".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::UpstreamError("down".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApiError::DeserializationError("bad json".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
