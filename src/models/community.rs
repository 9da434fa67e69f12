use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    pub creator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The subset of a community exposed to the search control.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommunitySummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CommunityIden {
    Id(Uuid),
    Name(String),
}

impl Community {
    /// Path of the post submission page for this community.
    pub fn submit_path(&self) -> String {
        format!("/r/{}/submit", self.name)
    }
}

impl From<Community> for CommunitySummary {
    fn from(Community { id, name, .. }: Community) -> Self {
        CommunitySummary { id, name }
    }
}

impl fmt::Display for CommunityIden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunityIden::Id(id) => write!(f, "ID {}", id),
            CommunityIden::Name(name) => write!(f, "name 'r/{}'", name),
        }
    }
}

impl From<Uuid> for CommunityIden {
    fn from(id: Uuid) -> Self {
        CommunityIden::Id(id)
    }
}

impl From<&str> for CommunityIden {
    fn from(name: &str) -> Self {
        CommunityIden::Name(name.to_string())
    }
}

impl From<String> for CommunityIden {
    fn from(name: String) -> Self {
        CommunityIden::Name(name)
    }
}
