use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::domain::DomainError;

/// The failing outcome of one request. Converting it into a [`Response`] is
/// the only place an error reaches the wire.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::UnrecognizedClassification(_) => StatusCode::FORBIDDEN,
            DomainError::Remote(_)
            | DomainError::Configuration(_)
            | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn inner(&self) -> &DomainError {
        &self.0
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request failed with {}: {}", status.as_u16(), self.0);
        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::invalid_input("bad"), StatusCode::BAD_REQUEST),
            (DomainError::unrecognized("vue"), StatusCode::FORBIDDEN),
            (DomainError::remote("down"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::internal("panic"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            let api_err = ApiError::from(err);
            assert_eq!(api_err.status(), expected);
            assert!(!api_err.inner().to_string().is_empty());
        }
    }

    #[test]
    fn test_response_carries_status_and_plain_message() {
        let response = ApiError::from(DomainError::remote("unexpected status code: 502"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }
}
