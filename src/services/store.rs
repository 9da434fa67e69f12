use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{Community, Post, PostCreate, SessionRecord, SessionUser, User};

/// Read and write access to communities and their posts.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Unique-or-absent lookup. A second row with the same name is reported
    /// as [`StoreError::Ambiguous`] instead of picking one.
    async fn find_community_by_name(&self, name: &str) -> Result<Option<Community>, StoreError>;

    async fn find_community_by_id(&self, id: Uuid) -> Result<Option<Community>, StoreError>;

    /// Newest first.
    async fn recent_communities(&self, limit: i64) -> Result<Vec<Community>, StoreError>;

    /// Case-insensitive name prefix match, ordered by name.
    async fn search_communities(
        &self,
        prefix: &str,
        limit: i64,
    ) -> Result<Vec<Community>, StoreError>;

    async fn create_post(&self, data: &PostCreate) -> Result<Post, StoreError>;
}

/// Persistence behind [`crate::services::SessionProvider`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The user owning `token`, if the session exists and has not expired at `now`.
    async fn find_session_user(
        &self,
        token: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUser>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn create_session(
        &self,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<SessionRecord, StoreError>;

    async fn delete_session(&self, token: Uuid) -> Result<(), StoreError>;
}
