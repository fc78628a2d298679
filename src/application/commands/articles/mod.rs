mod access;
mod create;
mod delete;
mod favorite;
mod service;
mod update;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use favorite::FavoriteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
