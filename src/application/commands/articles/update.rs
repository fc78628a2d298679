use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleDraft, ArticleTitle, ArticleUpdate, TagList,
    },
};

/// Replaces the non-blank fields of `article` on the article at `slug`.
/// Blank strings and an empty tag list leave the stored values untouched.
pub struct UpdateArticleCommand {
    pub slug: String,
    pub article: ArticleDraft,
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.find_owned_by_slug(actor, command.slug).await?;
        let ArticleDraft {
            title,
            description,
            body,
            tag_list,
        } = command.article;

        let title = non_blank(title)
            .map(ArticleTitle::new)
            .transpose()?
            .filter(|title| *title != article.title);
        let description = non_blank(description)
            .map(ArticleDescription::new)
            .transpose()?
            .filter(|description| *description != article.description);
        let body = non_blank(body)
            .map(ArticleBody::new)
            .transpose()?
            .filter(|body| *body != article.body);
        let tag_list = if tag_list.is_empty() {
            None
        } else {
            Some(TagList::new(tag_list)?).filter(|tags| *tags != article.tag_list)
        };

        let mut update = ArticleUpdate::new(article.id, article.updated_at);
        let now = self.clock.now();

        if title.is_some() || description.is_some() || body.is_some() {
            let new_title = title.clone().unwrap_or_else(|| article.title.clone());
            let new_description = description
                .clone()
                .unwrap_or_else(|| article.description.clone());
            let new_body = body.clone().unwrap_or_else(|| article.body.clone());
            article.set_content(new_title, new_description, new_body, now);

            if let Some(title) = title {
                let slug = self
                    .slug_service
                    .generate_unique_slug(&title, Some(article.id), now)
                    .await?;
                if slug != article.slug {
                    article.set_slug(slug.clone(), now);
                    update = update.with_slug(slug);
                }
                update = update.with_title(title);
            }
            if let Some(description) = description {
                update = update.with_description(description);
            }
            if let Some(body) = body {
                update = update.with_body(body);
            }
        }

        if let Some(tags) = tag_list {
            article.set_tags(tags.clone(), now);
            update = update.with_tags(tags);
        }

        if update.is_empty() {
            return self.assembler.assemble(article, Some(actor.id)).await;
        }

        update.set_updated_at(now);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(slug = %updated.slug, "article updated");
        self.assembler.assemble(updated, Some(actor.id)).await
    }
}
