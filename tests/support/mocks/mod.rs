// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_repos;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use article_repos::InMemoryArticleRepo;
pub use security::{DummyPasswordHasher, DummyTokenManager, OTHER_TOKEN, TEST_TOKEN};
pub use time::fixed_now;
pub use user_repo::{InMemoryUserRepo, sample_user};
pub use util::{DummyClock, DummySlug};
