use std::sync::Arc;

use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleReadRepository},
        user::{UserId, UserRepository},
    },
};

/// Builds `ArticleDto`s by joining an article with its author and the
/// viewer's favorite state.
pub struct ArticleAssembler {
    user_repo: Arc<dyn UserRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleAssembler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
    ) -> Self {
        Self {
            user_repo,
            read_repo,
        }
    }

    pub async fn assemble(
        &self,
        article: Article,
        viewer: Option<UserId>,
    ) -> ApplicationResult<ArticleDto> {
        let author = self
            .user_repo
            .find_by_id(article.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article author not found"))?;

        let favorited = match viewer {
            Some(user_id) => self.read_repo.is_favorited(article.id, user_id).await?,
            None => false,
        };

        Ok(ArticleDto::from_parts(article, &author, favorited))
    }
}
