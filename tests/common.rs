#![allow(dead_code, unused_macros)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use breadit::common::StoreError;
use breadit::models::*;
use breadit::services::{EntityStore, PasswordManager, SessionProvider, SessionStore};
use breadit::web::AppState;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub const ALICE_TOKEN: Uuid = Uuid::from_u128(0xbeef);
pub const EXPIRED_TOKEN: Uuid = Uuid::from_u128(0xdead);
pub const ALICE_PASSWORD: &str = "correct horse battery staple";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_user_alice() -> User {
    User {
        id: Uuid::from_u128(0xa11ce),
        name: Some("alice".to_string()),
        username: Some("alice".to_string()),
        email: "alice@test.com".to_string(),
        image: None,
        password_hash: "placeholder".to_string(),
        created_at: parse_time("2026-10-01 09:00:00+00"),
    }
}

pub fn get_seed_user_bob() -> User {
    User {
        id: Uuid::from_u128(0xb0b),
        name: Some("bob".to_string()),
        username: None,
        email: "bob@test.com".to_string(),
        image: None,
        password_hash: "placeholder".to_string(),
        created_at: parse_time("2026-10-02 09:00:00+00"),
    }
}

pub fn get_seed_community_cats() -> Community {
    Community {
        id: Uuid::from_u128(0xc1),
        name: "cats".to_string(),
        creator_id: Some(Uuid::from_u128(0xa11ce)),
        created_at: parse_time("2026-10-03 12:00:00+00"),
        updated_at: parse_time("2026-10-03 12:00:00+00"),
    }
}

pub fn get_seed_community_catalysts() -> Community {
    Community {
        id: Uuid::from_u128(0xc2),
        name: "catalysts".to_string(),
        creator_id: None,
        created_at: parse_time("2026-10-04 12:00:00+00"),
        updated_at: parse_time("2026-10-04 12:00:00+00"),
    }
}

pub fn get_seed_community_dogs() -> Community {
    Community {
        id: Uuid::from_u128(0xd1),
        name: "dogs".to_string(),
        creator_id: None,
        created_at: parse_time("2026-10-05 12:00:00+00"),
        updated_at: parse_time("2026-10-05 12:00:00+00"),
    }
}

pub fn get_seed_session_alice() -> SessionRecord {
    SessionRecord {
        token: ALICE_TOKEN,
        user_id: Uuid::from_u128(0xa11ce),
        expires_at: parse_time("2999-01-01 00:00:00+00"),
        created_at: parse_time("2026-10-06 00:00:00+00"),
    }
}

pub fn get_seed_session_expired() -> SessionRecord {
    SessionRecord {
        token: EXPIRED_TOKEN,
        user_id: Uuid::from_u128(0xa11ce),
        expires_at: parse_time("2026-01-01 00:00:00+00"),
        created_at: parse_time("2025-12-01 00:00:00+00"),
    }
}

/// Entity and session store kept in memory, mirroring the Postgres semantics.
#[derive(Default)]
pub struct InMemoryStore {
    pub communities: RwLock<Vec<Community>>,
    pub users: RwLock<Vec<User>>,
    pub sessions: RwLock<Vec<SessionRecord>>,
    pub posts: RwLock<Vec<Post>>,
    pub failing: AtomicBool,
}

impl InMemoryStore {
    /// Empty store.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seeded with alice, bob, three communities and two of alice's sessions.
    pub fn seeded() -> Arc<Self> {
        Arc::new(Self {
            communities: RwLock::new(vec![
                get_seed_community_cats(),
                get_seed_community_catalysts(),
                get_seed_community_dogs(),
            ]),
            users: RwLock::new(vec![get_seed_user_alice(), get_seed_user_bob()]),
            sessions: RwLock::new(vec![
                get_seed_session_alice(),
                get_seed_session_expired(),
            ]),
            ..Default::default()
        })
    }

    /// Gives alice a real argon2 hash of [`ALICE_PASSWORD`].
    pub async fn with_alice_password(self: Arc<Self>) -> Arc<Self> {
        let hash = PasswordManager::hash_password(ALICE_PASSWORD).expect("hashing should succeed");
        for user in self.users.write().await.iter_mut() {
            if user.id == get_seed_user_alice().id {
                user.password_hash = hash.clone();
            }
        }
        self
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn find_community_by_name(&self, name: &str) -> Result<Option<Community>, StoreError> {
        self.check()?;
        let communities = self.communities.read().await;
        let mut matches = communities.iter().filter(|c| c.name == name);
        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(StoreError::Ambiguous(CommunityIden::from(name)));
        }
        Ok(first)
    }

    async fn find_community_by_id(&self, id: Uuid) -> Result<Option<Community>, StoreError> {
        self.check()?;
        Ok(self
            .communities
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn recent_communities(&self, limit: i64) -> Result<Vec<Community>, StoreError> {
        self.check()?;
        let mut communities = self.communities.read().await.clone();
        communities.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.name.cmp(&b.name)));
        communities.truncate(limit.max(0) as usize);
        Ok(communities)
    }

    async fn search_communities(
        &self,
        prefix: &str,
        limit: i64,
    ) -> Result<Vec<Community>, StoreError> {
        self.check()?;
        let prefix = prefix.to_lowercase();
        let mut found: Vec<Community> = self
            .communities
            .read()
            .await
            .iter()
            .filter(|c| c.name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found.truncate(limit.max(0) as usize);
        Ok(found)
    }

    async fn create_post(&self, data: &PostCreate) -> Result<Post, StoreError> {
        self.check()?;
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            content: data.content.clone(),
            community_id: data.community_id,
            author_id: data.author_id,
            created_at: now,
            updated_at: now,
        };
        self.posts.write().await.push(post.clone());
        Ok(post)
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn find_session_user(
        &self,
        token: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUser>, StoreError> {
        self.check()?;
        let user_id = self
            .sessions
            .read()
            .await
            .iter()
            .find(|s| s.token == token && !s.is_expired_at(now))
            .map(|s| s.user_id);

        let Some(user_id) = user_id else {
            return Ok(None);
        };

        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .map(SessionUser::from))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_session(
        &self,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<SessionRecord, StoreError> {
        self.check()?;
        let record = SessionRecord {
            token: Uuid::new_v4(),
            user_id,
            expires_at,
            created_at: Utc::now(),
        };
        self.sessions.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete_session(&self, token: Uuid) -> Result<(), StoreError> {
        self.check()?;
        self.sessions.write().await.retain(|s| s.token != token);
        Ok(())
    }
}

pub fn app_state(store: Arc<InMemoryStore>) -> AppState {
    let sessions = SessionProvider::new(store.clone(), Duration::days(30));
    AppState::new(store, sessions, false)
}

/// Initialises the full application over an [`InMemoryStore`], mounted
/// the same way the binary mounts it.
macro_rules! test_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($crate::common::app_state($store)))
                .service(actix_files::Files::new(
                    breadit::web::helpers::STATIC_PREFIX,
                    "./static",
                ))
                .wrap(breadit::web::SessionLoader)
                .configure(breadit::web::configure),
        )
        .await
    };
}

/// Undoes the HTML escaping askama applies, for substring assertions.
pub fn decoded(body: &str) -> String {
    body.replace("&#x2f;", "/")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
