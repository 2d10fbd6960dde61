//! Errors surfaced by the signup and unregister operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorDetail;

/// Rejections from the activity registry. The `Display` text is what the
/// caller sees in the `detail` field of the error body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl SignupError {
    /// - ActivityNotFound: 404 Not Found
    /// - everything else: 400 Bad Request
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::ActivityFull | Self::NotSignedUp => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            SignupError::ActivityNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SignupError::AlreadySignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SignupError::ActivityFull.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SignupError::NotSignedUp.status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages_are_fixed() {
        assert_eq!(
            SignupError::ActivityNotFound.to_string(),
            "Activity not found"
        );
        assert_eq!(
            SignupError::AlreadySignedUp.to_string(),
            "Student already signed up for this activity"
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = SignupError::AlreadySignedUp.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
