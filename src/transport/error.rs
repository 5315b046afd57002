use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::{core::store::StoreError, service::quote_service::ServiceError};

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// HTTP status code, repeated in the body.
    pub code: u16,
}

/// Handler failure mapped to an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be decoded.
    #[error("{0}")]
    BadRequest(String),
    /// Service or store failure.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Service(ServiceError::Invalid(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::Store(err)) => match err {
                StoreError::NotFound
                | StoreError::AuthorNotFound(_)
                | StoreError::AuthorHasNoQuotes(_)
                | StoreError::QuoteNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::DuplicateQuote { .. } => StatusCode::CONFLICT,
                StoreError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(code = status.as_u16(), err = %self, "request failed");
        let body = ErrorBody {
            error: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}
