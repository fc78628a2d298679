use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Idempotent: favoriting twice keeps a single favorite.
    async fn add_favorite(&self, id: ArticleId, user_id: UserId) -> DomainResult<()>;
    async fn remove_favorite(&self, id: ArticleId, user_id: UserId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn is_favorited(&self, id: ArticleId, user_id: UserId) -> DomainResult<bool>;
    /// Distinct tags across all articles, sorted.
    async fn list_tags(&self) -> DomainResult<Vec<String>>;
}
