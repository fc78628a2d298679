use crate::application::ApplicationResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// A failed request. The response carries the status line only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpError {
    status: StatusCode,
}

impl HttpError {
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED)
    }

    pub fn bad_request() -> Self {
        Self::new(StatusCode::BAD_REQUEST)
    }

    pub fn unprocessable() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode) -> Self {
        Self { status }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        self.status.into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    /// Collapses any use-case failure into 422, logging it against `path`.
    fn into_http(self, path: &str) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self, path: &str) -> HttpResult<T> {
        self.map_err(|err| {
            tracing::warn!(path, error = %err, "use case failed");
            HttpError::unprocessable()
        })
    }
}
