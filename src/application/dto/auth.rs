use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

use super::UserDto;

#[derive(Debug, Clone)]
pub struct AuthTokenDto {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Identity resolved from a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub username: String,
}

impl TokenSubject {
    pub fn from_authenticated(auth: &AuthenticatedUser) -> Self {
        Self {
            user_id: auth.id,
            username: auth.username.clone(),
        }
    }
}

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub token: AuthTokenDto,
    pub user: UserDto,
}
