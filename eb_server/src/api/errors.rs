//! API error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use elimination_bracket::BracketError;
use serde::Serialize;
use thiserror::Error;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors returned by bracket handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not a decodable bracket request
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    /// Submitted field failed validation
    #[error(transparent)]
    InvalidField(#[from] BracketError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
            Self::InvalidField(BracketError::TooManyParticipants { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            Self::InvalidField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Short label used for metrics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "invalid_body",
            Self::InvalidField(BracketError::EmptyId { .. }) => "empty_id",
            Self::InvalidField(BracketError::DuplicateId(_)) => "duplicate_id",
            Self::InvalidField(BracketError::ZeroSeed(_)) => "zero_seed",
            Self::InvalidField(BracketError::TooManyParticipants { .. }) => "too_many_participants",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let too_many = ApiError::from(BracketError::TooManyParticipants { max: 2, actual: 3 });
        assert_eq!(too_many.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(too_many.reason(), "too_many_participants");

        let duplicate = ApiError::from(BracketError::DuplicateId("a".to_string()));
        assert_eq!(duplicate.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(duplicate.reason(), "duplicate_id");
    }

    #[test]
    fn test_message_is_transparent() {
        let err = ApiError::from(BracketError::ZeroSeed("athlete-1".to_string()));
        assert_eq!(
            err.to_string(),
            BracketError::ZeroSeed("athlete-1".to_string()).to_string()
        );
    }
}
