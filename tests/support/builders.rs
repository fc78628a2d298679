// tests/support/builders.rs
use conduit_core::domain::article::*;
use conduit_core::domain::user::UserId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    description: String,
    body: String,
    tags: Vec<String>,
    author_id: i64,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            description: "Test description".into(),
            body: "Test body".into(),
            tags: vec!["testing".into()],
            author_id: 1,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            description: ArticleDescription::new(self.description).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            tag_list: TagList::new(self.tags).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            favorites_count: 0,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
