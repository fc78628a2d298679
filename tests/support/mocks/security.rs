// tests/support/mocks/security.rs
use async_trait::async_trait;
use conduit_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use conduit_core::domain::user::UserId;

use super::time::fixed_now;

/// Resolves to seeded user 1 ("jake").
pub const TEST_TOKEN: &str = "test-token";
/// Resolves to seeded user 2 ("jane").
pub const OTHER_TOKEN: &str = "other-token";

/// Stores passwords as `hashed:<plain>`.
#[derive(Clone)]
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Issues `token-for-<id>-<username>` and accepts those plus the two
/// fixed test tokens.
#[derive(Clone)]
pub struct DummyTokenManager;

fn identity(id: i64, username: &str) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = fixed_now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}-{}", i64::from(subject.user_id), subject.username),
            issued_at: now,
            expires_at: now + chrono::Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            TEST_TOKEN => Ok(identity(1, "jake")),
            OTHER_TOKEN => Ok(identity(2, "jane")),
            other => other
                .strip_prefix("token-for-")
                .and_then(|rest| rest.split_once('-'))
                .and_then(|(id, name)| id.parse::<i64>().ok().map(|id| identity(id, name)))
                .ok_or_else(|| ApplicationError::unauthorized("invalid token")),
        }
    }
}
