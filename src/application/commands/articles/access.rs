use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleSlug, specifications::CanModifyArticleSpec},
};

impl ArticleCommandService {
    pub(super) async fn find_by_slug(&self, slug: String) -> ApplicationResult<Article> {
        let slug = ArticleSlug::new(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    pub(super) async fn find_owned_by_slug(
        &self,
        actor: &AuthenticatedUser,
        slug: String,
    ) -> ApplicationResult<Article> {
        let article = self.find_by_slug(slug).await?;
        if !CanModifyArticleSpec::new(&article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may modify this article",
            ));
        }
        Ok(article)
    }
}
