//! User Model and Directory
//!
//! The user directory is the authoritative account store: an in-memory map
//! with unique indexes on email (case-insensitive) and username. Uniqueness
//! is checked and the entry inserted under one write lock, so concurrent
//! signups with the same identifier cannot both succeed. When Postgres is
//! configured the directory is mirrored through `auth::db` and reloaded on
//! boot.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A registered user
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User email address (unique, case-insensitive)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Why an insert was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertUserError {
    EmailTaken,
    UsernameTaken,
}

#[derive(Default)]
struct DirectoryInner {
    by_id: HashMap<Uuid, User>,
    by_email: HashMap<String, Uuid>,
    by_username: HashMap<String, Uuid>,
}

/// In-memory account store with unique email/username indexes.
pub struct UserDirectory {
    inner: RwLock<DirectoryInner>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner::default()),
        }
    }

    /// Register a new user.
    ///
    /// Uniqueness check and insert happen under one write lock; two
    /// concurrent signups with the same email or username cannot both
    /// succeed.
    pub async fn insert(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<User, InsertUserError> {
        let mut inner = self.inner.write().await;
        let email_key = email.to_lowercase();
        if inner.by_email.contains_key(&email_key) {
            return Err(InsertUserError::EmailTaken);
        }
        if inner.by_username.contains_key(&username) {
            return Err(InsertUserError::UsernameTaken);
        }

        let user = User {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        };
        inner.by_email.insert(email_key, user.id);
        inner.by_username.insert(user.username.clone(), user.id);
        inner.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    /// Re-insert a user loaded from the database mirror at boot.
    pub async fn restore(&self, user: User) {
        let mut inner = self.inner.write().await;
        inner.by_email.insert(user.email.to_lowercase(), user.id);
        inner.by_username.insert(user.username.clone(), user.id);
        inner.by_id.insert(user.id, user);
    }

    pub async fn get(&self, id: Uuid) -> Option<User> {
        self.inner.read().await.by_id.get(&id).cloned()
    }

    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.read().await;
        let id = inner.by_email.get(&email.to_lowercase())?;
        inner.by_id.get(id).cloned()
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.inner.read().await.by_id.contains_key(&id)
    }

    /// Display name for a user id, used to enrich outgoing messages.
    pub async fn username_of(&self, id: Uuid) -> Option<String> {
        self.inner
            .read()
            .await
            .by_id
            .get(&id)
            .map(|u| u.username.clone())
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.by_id.len()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
