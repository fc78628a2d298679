pub mod articles;
pub mod auth;
pub mod users;

pub use articles::{ArticleDto, ProfileDto};
pub use auth::{AuthTokenDto, AuthenticatedSession, AuthenticatedUser, TokenSubject};
pub use users::UserDto;
