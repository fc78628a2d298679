use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedSession, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Look up the caller and hand back a freshly issued token alongside.
    pub async fn current_user(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<AuthenticatedSession> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let token = self
            .token_manager
            .issue(TokenSubject::from_authenticated(actor))
            .await?;

        Ok(AuthenticatedSession {
            token,
            user: user.into(),
        })
    }
}
