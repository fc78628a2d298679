use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleDraft, ArticleTitle, NewArticle, TagList,
    },
};

pub struct CreateArticleCommand {
    pub article: ArticleDraft,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        self.user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;

        let ArticleDraft {
            title,
            description,
            body,
            tag_list,
        } = command.article;
        let title = ArticleTitle::new(title)?;
        let description = ArticleDescription::new(description)?;
        let body = ArticleBody::new(body)?;
        let tag_list = TagList::new(tag_list)?;
        let now = self.clock.now();

        let slug = self.slug_service.generate_unique_slug(&title, None, now).await?;

        let new_article = NewArticle {
            slug,
            title,
            description,
            body,
            tag_list,
            author_id: actor.id,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(slug = %created.slug, author = %actor.username, "article created");
        self.assembler.assemble(created, Some(actor.id)).await
    }
}
