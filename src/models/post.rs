use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::common::PostError;

pub const POST_TITLE_MIN_CHARS: usize = 3;
pub const POST_TITLE_MAX_CHARS: usize = 128;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub community_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: Option<String>,
    pub community_id: Uuid,
    pub author_id: Uuid,
}

impl PostCreate {
    /// Builds a validated post: the title is trimmed and must be
    /// 3..=128 characters, blank content is dropped.
    pub fn new(
        title: &str,
        content: Option<&str>,
        community_id: Uuid,
        author_id: Uuid,
    ) -> Result<Self, PostError> {
        let title = title.trim();
        let chars = title.chars().count();

        if chars < POST_TITLE_MIN_CHARS {
            return Err(PostError::TitleTooShort(POST_TITLE_MIN_CHARS));
        }
        if chars > POST_TITLE_MAX_CHARS {
            return Err(PostError::TitleTooLong(POST_TITLE_MAX_CHARS));
        }

        let content = content
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(PostCreate {
            title: title.to_string(),
            content,
            community_id,
            author_id,
        })
    }
}
