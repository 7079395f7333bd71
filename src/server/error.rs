use crate::error::{Error, ErrorKind};
use crate::models::ErrorBody;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

/// Error response wrapper mapping [`Error`] onto an HTTP status and a
/// `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(Error::MalformedBody(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Configuration | ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::MalformedBody => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::Upstream | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed ({:?}): {}", self.0.kind(), self.0);
        } else {
            tracing::warn!("Request rejected ({:?}): {}", self.0.kind(), self.0);
        }

        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Turn a handler panic into a 500 `{"detail": ...}` response.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError(Error::Internal(message)).into_response()
}
