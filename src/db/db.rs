use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use std::time::Duration;

use crate::common::{GeneralError, StoreError};
use crate::db;
use crate::models::{Community, Post, PostCreate, SessionRecord, SessionUser, User};
use crate::services::{EntityStore, SessionStore};

/// Postgres-backed entity and session store.
#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Connects and applies pending migrations.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for Database {
    async fn find_community_by_name(&self, name: &str) -> Result<Option<Community>, StoreError> {
        db::find_community_by_name(&self.pool, name).await
    }

    async fn find_community_by_id(&self, id: Uuid) -> Result<Option<Community>, StoreError> {
        Ok(db::get_community_by_id(&self.pool, id).await?)
    }

    async fn recent_communities(&self, limit: i64) -> Result<Vec<Community>, StoreError> {
        Ok(db::list_recent_communities(&self.pool, limit).await?)
    }

    async fn search_communities(
        &self,
        prefix: &str,
        limit: i64,
    ) -> Result<Vec<Community>, StoreError> {
        Ok(db::search_communities_by_prefix(&self.pool, prefix, limit).await?)
    }

    async fn create_post(&self, data: &PostCreate) -> Result<Post, StoreError> {
        Ok(db::create_post(&self.pool, data).await?)
    }
}

#[async_trait]
impl SessionStore for Database {
    async fn find_session_user(
        &self,
        token: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUser>, StoreError> {
        Ok(db::get_session_user(&self.pool, token, now).await?)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(db::get_user_by_email(&self.pool, email).await?)
    }

    async fn create_session(
        &self,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<SessionRecord, StoreError> {
        Ok(db::create_session(&self.pool, user_id, expires_at).await?)
    }

    async fn delete_session(&self, token: Uuid) -> Result<(), StoreError> {
        db::delete_session(&self.pool, token).await?;
        Ok(())
    }
}
