// tests/support/mocks/article_repos.rs
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use conduit_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::user::UserId;

#[derive(Default)]
struct State {
    articles: HashMap<i64, Article>,
    favorites: HashSet<(i64, i64)>,
}

#[derive(Default)]
struct Inner {
    state: Mutex<State>,
    calls: AtomicUsize,
    updates: AtomicUsize,
}

/// Backs both article repository traits with one shared map so writes are
/// visible to reads. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryArticleRepo {
    inner: Arc<Inner>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, article: Article) {
        self.inner
            .state
            .lock()
            .unwrap()
            .articles
            .insert(i64::from(article.id), article);
    }

    pub fn get(&self, slug: &str) -> Option<Article> {
        self.inner
            .state
            .lock()
            .unwrap()
            .articles
            .values()
            .find(|a| a.slug.as_str() == slug)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.state.lock().unwrap().articles.len()
    }

    /// Number of repository calls made so far, reads and writes combined.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Number of `update` writes attempted.
    pub fn updates(&self) -> usize {
        self.inner.updates.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn with_count(state: &State, mut article: Article) -> Article {
        let id = i64::from(article.id);
        article.favorites_count = state.favorites.iter().filter(|(a, _)| *a == id).count() as u64;
        article
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        self.touch();
        let mut state = self.inner.state.lock().unwrap();
        if state.articles.values().any(|a| a.slug == new.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let id = state.articles.keys().max().copied().unwrap_or(0) + 1;
        let article = Article {
            id: ArticleId::new(id)?,
            slug: new.slug,
            title: new.title,
            description: new.description,
            body: new.body,
            tag_list: new.tag_list,
            author_id: new.author_id,
            favorites_count: 0,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.touch();
        self.inner.updates.fetch_add(1, Ordering::SeqCst);
        let mut state = self.inner.state.lock().unwrap();
        let key = i64::from(update.id);
        let stored = state
            .articles
            .get_mut(&key)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if stored.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }

        if let Some(title) = update.title {
            stored.title = title;
        }
        if let Some(slug) = update.slug {
            stored.slug = slug;
        }
        if let Some(description) = update.description {
            stored.description = description;
        }
        if let Some(body) = update.body {
            stored.body = body;
        }
        if let Some(tags) = update.tag_list {
            stored.tag_list = tags;
        }
        stored.updated_at = update.updated_at;

        let article = stored.clone();
        Ok(Self::with_count(&state, article))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.touch();
        let mut state = self.inner.state.lock().unwrap();
        let key = i64::from(id);
        if state.articles.remove(&key).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.favorites.retain(|(article, _)| *article != key);
        Ok(())
    }

    async fn add_favorite(&self, id: ArticleId, user_id: UserId) -> DomainResult<()> {
        self.touch();
        let mut state = self.inner.state.lock().unwrap();
        state.favorites.insert((i64::from(id), i64::from(user_id)));
        Ok(())
    }

    async fn remove_favorite(&self, id: ArticleId, user_id: UserId) -> DomainResult<()> {
        self.touch();
        let mut state = self.inner.state.lock().unwrap();
        state.favorites.remove(&(i64::from(id), i64::from(user_id)));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.touch();
        let state = self.inner.state.lock().unwrap();
        Ok(state
            .articles
            .get(&i64::from(id))
            .cloned()
            .map(|a| Self::with_count(&state, a)))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        self.touch();
        let state = self.inner.state.lock().unwrap();
        Ok(state
            .articles
            .values()
            .find(|a| &a.slug == slug)
            .cloned()
            .map(|a| Self::with_count(&state, a)))
    }

    async fn is_favorited(&self, id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        self.touch();
        let state = self.inner.state.lock().unwrap();
        Ok(state
            .favorites
            .contains(&(i64::from(id), i64::from(user_id))))
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        self.touch();
        let state = self.inner.state.lock().unwrap();
        let tags: BTreeSet<String> = state
            .articles
            .values()
            .flat_map(|a| a.tag_list.as_slice().iter().cloned())
            .collect();
        Ok(tags.into_iter().collect())
    }
}
