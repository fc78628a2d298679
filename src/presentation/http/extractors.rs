// src/presentation/http/extractors.rs
use crate::{application::dto::AuthenticatedUser, presentation::http::state::HttpState};
use axum::{
    Extension, Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// The caller identity, resolved from `Authorization: Token <t>` or
/// `Authorization: Bearer <t>`. Rejects with a bare 401.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(bearer) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }

    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = raw.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("token") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_owned();

        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|err| {
                tracing::error!(path = %path, error = %err, "application state missing");
                HttpError::internal()
            })?;

        let Some(token) = token_from_headers(&parts.headers) else {
            tracing::warn!(path = %path, "missing or malformed Authorization header");
            return Err(HttpError::unauthorized());
        };

        let manager = app_state.services.token_manager();
        let user = manager.authenticate(&token).await.map_err(|err| {
            tracing::warn!(path = %path, error = %err, "token rejected");
            HttpError::unauthorized()
        })?;

        Ok(Self(user))
    }
}

/// `axum::Json` with every rejection collapsed into a bare 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_owned();
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(path = %path, error = %rejection.body_text(), "malformed request body");
                Err(HttpError::bad_request())
            }
        }
    }
}

/// The `{slug}` path segment. A segment that does not decode to UTF-8 is
/// treated like any other unusable slug and rejected with a bare 422.
#[derive(Debug, Clone)]
pub struct SlugPath(pub String);

impl<S> FromRequestParts<S> for SlugPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(slug)) => Ok(Self(slug)),
            Err(rejection) => {
                let path = parts.uri.path();
                tracing::warn!(path = %path, error = %rejection.body_text(), "undecodable slug");
                Err(HttpError::unprocessable())
            }
        }
    }
}
