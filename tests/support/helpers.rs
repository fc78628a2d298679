// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, header};
use axum::response::Response;
use conduit_core::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::SlugGenerator,
};
use conduit_core::application::services::ApplicationServices;
use conduit_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use conduit_core::domain::user::UserRepository;
use conduit_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{
    DummyClock, DummyPasswordHasher, DummySlug, DummyTokenManager, InMemoryArticleRepo,
    InMemoryUserRepo,
};

/// A router over in-memory repositories, with handles to inspect them.
pub struct TestApp {
    pub router: axum::Router,
    pub articles: InMemoryArticleRepo,
    pub users: InMemoryUserRepo,
}

impl TestApp {
    /// Total repository calls across users and articles.
    pub fn repo_calls(&self) -> usize {
        self.articles.calls() + self.users.calls()
    }
}

pub fn build_services(users: &InMemoryUserRepo, articles: &InMemoryArticleRepo) -> Arc<ApplicationServices> {
    let user_repo: Arc<dyn UserRepository> = Arc::new(users.clone());
    let article_write: Arc<dyn ArticleWriteRepository> = Arc::new(articles.clone());
    let article_read: Arc<dyn ArticleReadRepository> = Arc::new(articles.clone());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DummySlug);

    Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ))
}

pub fn make_test_app() -> TestApp {
    let users = InMemoryUserRepo::seeded();
    let articles = InMemoryArticleRepo::new();
    let services = build_services(&users, &articles);
    let router = build_router(HttpState { services }, &["http://localhost:3000".to_string()]);

    TestApp {
        router,
        articles,
        users,
    }
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    raw_request(method, uri, token, Body::from(body.to_string()))
}

pub fn raw_request(method: Method, uri: &str, token: Option<&str>, body: Body) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }
    builder.body(body).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = read_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

pub fn article_payload(title: &str, description: &str, body: &str, tags: &[&str]) -> Value {
    serde_json::json!({
        "article": {
            "title": title,
            "description": description,
            "body": body,
            "tagList": tags,
        }
    })
}
