// tests/support/mocks/user_repo.rs
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::user::{
    Email, NewUser, PasswordHash, User, UserId, UserRepository, Username,
};

use super::time::fixed_now;

#[derive(Default)]
struct Inner {
    users: Mutex<HashMap<i64, User>>,
    calls: AtomicUsize,
}

/// Stateful user store. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryUserRepo {
    inner: Arc<Inner>,
}

pub fn sample_user(id: i64, username: &str) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        email: Email::new(format!("{username}@example.com")).unwrap(),
        password_hash: PasswordHash::new("hashed:password123").unwrap(),
        bio: None,
        image: None,
        created_at: fixed_now(),
    }
}

impl InMemoryUserRepo {
    /// Seeded with "jake" (id 1) and "jane" (id 2), both with password
    /// `password123`.
    pub fn seeded() -> Self {
        let repo = Self::default();
        repo.put(sample_user(1, "jake"));
        repo.put(sample_user(2, "jane"));
        repo
    }

    pub fn put(&self, user: User) {
        self.inner
            .users
            .lock()
            .unwrap()
            .insert(i64::from(user.id), user);
    }

    pub fn len(&self) -> usize {
        self.inner.users.lock().unwrap().len()
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn find<F>(&self, pred: F) -> Option<User>
    where
        F: Fn(&User) -> bool,
    {
        self.inner
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| pred(u))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.touch();
        let mut users = self.inner.users.lock().unwrap();
        if users.values().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already taken".into()));
        }
        if users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Conflict("email already registered".into()));
        }

        let id = users.keys().max().copied().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.touch();
        Ok(self.find(|u| u.id == id))
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.touch();
        Ok(self.find(|u| &u.username == username))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        self.touch();
        Ok(self.find(|u| &u.email == email))
    }
}
