use crate::domain::{article::Article, user::User};
use chrono::{DateTime, Utc};

/// Public view of an article author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDto {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl From<&User> for ProfileDto {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.to_string(),
            bio: user.bio.clone(),
            image: user.image.clone(),
            following: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: u64,
    pub author: ProfileDto,
}

impl ArticleDto {
    pub fn from_parts(article: Article, author: &User, favorited: bool) -> Self {
        Self {
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            description: article.description.into_inner(),
            body: article.body.into_inner(),
            tag_list: article.tag_list.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited,
            favorites_count: article.favorites_count,
            author: ProfileDto::from(author),
        }
    }
}
