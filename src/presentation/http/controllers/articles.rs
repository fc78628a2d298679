// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, FavoriteArticleCommand, UpdateArticleCommand,
    },
    queries::articles::GetArticleBySlugQuery,
};
use crate::domain::article::ArticleDraft;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, SlugPath};
use crate::presentation::http::formatter::{ArticleEnvelope, TagsResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{StatusCode, Uri},
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of `POST /articles` and `PUT /articles/{slug}`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ArticleRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub article: ArticleFields,
}

/// Absent or `null` fields arrive as empty values; the use-case layer
/// decides what an empty value means for the operation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleFields {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_list: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<ArticleFields> for ArticleDraft {
    fn from(fields: ArticleFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            body: fields.body,
            tag_list: fields.tag_list,
        }
    }
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleEnvelope),
        (status = 400, description = "Malformed request body."),
        (status = 401, description = "Missing or invalid token."),
        (status = 422, description = "Article could not be created.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleEnvelope>)> {
    let command = CreateArticleCommand {
        article: payload.article.into(),
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http(uri.path())?;

    Ok((StatusCode::CREATED, Json(ArticleEnvelope::extended(article))))
}

#[utoipa::path(
    put,
    path = "/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleEnvelope),
        (status = 400, description = "Malformed request body."),
        (status = 401, description = "Missing or invalid token."),
        (status = 422, description = "Article could not be updated.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    Authenticated(user): Authenticated,
    SlugPath(slug): SlugPath,
    JsonBody(payload): JsonBody<ArticleRequest>,
) -> HttpResult<Json<ArticleEnvelope>> {
    let command = UpdateArticleCommand {
        slug,
        article: payload.article.into(),
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http(uri.path())
        .map(|article| Json(ArticleEnvelope::extended(article)))
}

#[utoipa::path(
    get,
    path = "/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article found.", body = ArticleEnvelope),
        (status = 422, description = "Article could not be loaded.")
    ),
    security([]),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    SlugPath(slug): SlugPath,
) -> HttpResult<Json<ArticleEnvelope>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http(uri.path())
        .map(|article| Json(ArticleEnvelope::extended(article)))
}

#[utoipa::path(
    delete,
    path = "/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article deleted, empty body."),
        (status = 401, description = "Missing or invalid token."),
        (status = 422, description = "Article could not be deleted.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    Authenticated(user): Authenticated,
    SlugPath(slug): SlugPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { slug })
        .await
        .into_http(uri.path())?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    post,
    path = "/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article favorited.", body = ArticleEnvelope),
        (status = 401, description = "Missing or invalid token."),
        (status = 422, description = "Article could not be favorited.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn favorite_article(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    Authenticated(user): Authenticated,
    SlugPath(slug): SlugPath,
) -> HttpResult<Json<ArticleEnvelope>> {
    state
        .services
        .article_commands
        .favorite_article(&user, FavoriteArticleCommand { slug })
        .await
        .into_http(uri.path())
        .map(|article| Json(ArticleEnvelope::extended(article)))
}

#[utoipa::path(
    delete,
    path = "/articles/{slug}/favorite",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Favorite removed.", body = ArticleEnvelope),
        (status = 401, description = "Missing or invalid token."),
        (status = 422, description = "Favorite could not be removed.")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn unfavorite_article(
    Extension(state): Extension<HttpState>,
    uri: Uri,
    Authenticated(user): Authenticated,
    SlugPath(slug): SlugPath,
) -> HttpResult<Json<ArticleEnvelope>> {
    state
        .services
        .article_commands
        .unfavorite_article(&user, FavoriteArticleCommand { slug })
        .await
        .into_http(uri.path())
        .map(|article| Json(ArticleEnvelope::extended(article)))
}

#[utoipa::path(
    get,
    path = "/tags",
    responses(
        (status = 200, description = "Every tag in use.", body = TagsResponse),
        (status = 422, description = "Tags could not be loaded.")
    ),
    security([]),
    tag = "Articles"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    uri: Uri,
) -> HttpResult<Json<TagsResponse>> {
    state
        .services
        .article_queries
        .list_tags()
        .await
        .into_http(uri.path())
        .map(|tags| Json(TagsResponse { tags }))
}
