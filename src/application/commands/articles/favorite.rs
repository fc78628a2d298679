use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult},
};

pub struct FavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn favorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_by_slug(command.slug).await?;
        self.write_repo.add_favorite(article.id, actor.id).await?;
        self.reload(article.id, actor).await
    }

    pub async fn unfavorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_by_slug(command.slug).await?;
        self.write_repo.remove_favorite(article.id, actor.id).await?;
        self.reload(article.id, actor).await
    }

    async fn reload(
        &self,
        id: crate::domain::article::ArticleId,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        self.assembler.assemble(article, Some(actor.id)).await
    }
}
