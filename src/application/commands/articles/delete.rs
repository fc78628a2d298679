use super::ArticleCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.find_owned_by_slug(actor, command.slug).await?;
        self.write_repo.delete(article.id).await?;
        tracing::info!(slug = %article.slug, "article deleted");
        Ok(())
    }
}
