use sqlx::PgPool;
use uuid::Uuid;

use crate::common::StoreError;
use crate::models::{Community, CommunityIden};

/// Unique-or-absent lookup by name. Fetches up to two rows so a broken
/// uniqueness guarantee surfaces as [`StoreError::Ambiguous`].
pub async fn find_community_by_name(
    pool: &PgPool,
    name: &str,
) -> Result<Option<Community>, StoreError> {
    let mut rows = sqlx::query_as::<_, Community>(
        r#"
        SELECT *
        FROM communities
        WHERE name = $1
        LIMIT 2
        "#,
    )
    .bind(name)
    .fetch_all(pool)
    .await?;

    if rows.len() > 1 {
        return Err(StoreError::Ambiguous(CommunityIden::from(name)));
    }

    Ok(rows.pop())
}

pub async fn get_community_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Community>, sqlx::Error> {
    sqlx::query_as::<_, Community>(
        r#"
        SELECT *
        FROM communities
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_recent_communities(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<Community>, sqlx::Error> {
    sqlx::query_as::<_, Community>(
        r#"
        SELECT *
        FROM communities
        ORDER BY created_at DESC, name ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn search_communities_by_prefix(
    pool: &PgPool,
    prefix: &str,
    limit: i64,
) -> Result<Vec<Community>, sqlx::Error> {
    let pattern = format!("{}%", escape_like(prefix));

    sqlx::query_as::<_, Community>(
        r#"
        SELECT *
        FROM communities
        WHERE name ILIKE $1 ESCAPE '\'
        ORDER BY name ASC
        LIMIT $2
        "#,
    )
    .bind(pattern)
    .bind(limit)
    .fetch_all(pool)
    .await
}

fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
