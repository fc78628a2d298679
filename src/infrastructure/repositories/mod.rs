mod error;
mod postgres_article;
mod postgres_user;

use error::map_sqlx;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_user::PostgresUserRepository;
