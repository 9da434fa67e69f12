use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Identity carried by an authenticated session.
///
/// Everything the account menu needs and nothing that must stay server side.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: String,
    pub image: Option<String>,
}

impl From<User> for SessionUser {
    fn from(
        User {
            id,
            name,
            username,
            email,
            image,
            ..
        }: User,
    ) -> Self {
        SessionUser {
            id,
            name,
            username,
            email,
            image,
        }
    }
}
