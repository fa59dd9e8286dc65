//! Route-boundary error type.
//!
//! Handlers return `Result<HttpResponse, ApiError>`. Validation and not-found errors reach the
//! client as `{ "error": "<message>" }`; internal errors are logged with their cause and the
//! client only sees the generic message chosen by the route.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorBody;
use log::error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ApiError {
    /// Adapter for `map_err` that wraps any error into an `Internal` with a public message.
    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> ApiError
    where
        E: Into<BoxError>,
    {
        move |source| ApiError::Internal {
            message,
            source: source.into(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal { message, source } = self {
            error!("{}: {}", message, source);
        }
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
