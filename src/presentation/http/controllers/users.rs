// src/presentation/http/controllers/users.rs
use crate::application::commands::users::{LoginUserCommand, RegisterUserCommand};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::formatter::UserEnvelope;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, Uri},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub user: RegisterFields,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub user: LoginFields,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered.", body = UserEnvelope),
        (status = 400, description = "Malformed request body."),
        (status = 422, description = "Registration rejected.")
    ),
    security([]),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserEnvelope>)> {
    let RegisterFields {
        username,
        email,
        password,
    } = payload.user;

    let session = state
        .services
        .user_commands
        .register(RegisterUserCommand {
            username,
            email,
            password,
        })
        .await
        .into_http(uri.path())?;

    Ok((StatusCode::CREATED, Json(session.into())))
}

#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in.", body = UserEnvelope),
        (status = 400, description = "Malformed request body."),
        (status = 422, description = "Invalid credentials.")
    ),
    security([]),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Json<UserEnvelope>> {
    let LoginFields { email, password } = payload.user;

    state
        .services
        .user_commands
        .login(LoginUserCommand { email, password })
        .await
        .into_http(uri.path())
        .map(|session| Json(session.into()))
}

#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "The current user with a fresh token.", body = UserEnvelope),
        (status = 401, description = "Missing or invalid token."),
        (status = 422, description = "User could not be loaded.")
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn current_user(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserEnvelope>> {
    state
        .services
        .user_queries
        .current_user(&user)
        .await
        .into_http(uri.path())
        .map(|session| Json(session.into()))
}
