//! Wire representations of the DTOs returned by the use-case layer.

use crate::application::dto::{ArticleDto, AuthenticatedSession, ProfileDto};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

fn serialize_millis<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl From<ProfileDto> for ProfileResponse {
    fn from(dto: ProfileDto) -> Self {
        Self {
            username: dto.username,
            bio: dto.bio,
            image: dto.image,
            following: dto.following,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    #[serde(serialize_with = "serialize_millis")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_millis")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<ProfileResponse>,
}

impl ArticleResponse {
    /// `include_extended` controls whether the author profile is attached.
    pub fn from_dto(dto: ArticleDto, include_extended: bool) -> Self {
        Self {
            slug: dto.slug,
            title: dto.title,
            description: dto.description,
            body: dto.body,
            tag_list: dto.tag_list,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            favorited: dto.favorited,
            favorites_count: dto.favorites_count,
            author: include_extended.then(|| ProfileResponse::from(dto.author)),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleEnvelope {
    pub article: ArticleResponse,
}

impl ArticleEnvelope {
    /// Every single-article route answers with the author attached; the
    /// compact form is left to list views.
    pub fn extended(dto: ArticleDto) -> Self {
        Self {
            article: ArticleResponse::from_dto(dto, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

impl From<AuthenticatedSession> for UserEnvelope {
    fn from(session: AuthenticatedSession) -> Self {
        let AuthenticatedSession { token, user } = session;
        Self {
            user: UserResponse {
                email: user.email,
                token: token.token,
                username: user.username,
                bio: user.bio,
                image: user.image,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}
