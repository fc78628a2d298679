mod get_by_slug;
mod service;
mod tags;

pub use get_by_slug::GetArticleBySlugQuery;
pub use service::ArticleQueryService;
