//! Application error type and its HTTP representation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::repositories::StoreError;
use crate::utils::url_validator::TargetUrlError;

/// Errors returned by the shortener service and its HTTP handlers.
///
/// Bodies are plain text. Client errors carry enough detail to fix the
/// request; server errors carry only the status reason, the detail goes to
/// the logs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is not an absolute URL (400).
    #[error("could not parse URL {raw:?}: {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: TargetUrlError,
    },

    /// No mapping exists for the token (404).
    #[error("no URL stored for token {token:?}")]
    NotFound { token: String },

    /// The storage backend failed (500).
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    /// A stored URL cannot be sent as a `Location` header (500).
    #[error("stored URL for token {token:?} is not a valid redirect target")]
    InvalidRedirect { token: String },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::InvalidRedirect { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::InvalidUrl { raw, .. } => format!("Could not parse URL: {raw:?}"),
            _ => status.canonical_reason().unwrap_or_default().to_string(),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_url_response() {
        let source = crate::utils::url_validator::parse_target_url("://bad").unwrap_err();
        let err = AppError::InvalidUrl {
            raw: "://bad".to_string(),
            source,
        };

        let (status, body) = body_text(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Could not parse URL: \"://bad\"");
    }

    #[tokio::test]
    async fn test_invalid_url_response_escapes_control_characters() {
        let raw = "https://example.com/\u{1}";
        let source = crate::utils::url_validator::parse_target_url(raw).unwrap_err();
        let err = AppError::InvalidUrl {
            raw: raw.to_string(),
            source,
        };

        let (status, body) = body_text(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Could not parse URL: \"https://example.com/\\u{1}\"");
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, body) = body_text(AppError::NotFound {
            token: "missing".to_string(),
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn test_storage_response_hides_details() {
        let err = AppError::Storage(StoreError::read(std::io::Error::other(
            "connection reset by peer",
        )));

        let (status, body) = body_text(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Internal Server Error");
    }
}
