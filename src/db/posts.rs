use sqlx::PgPool;

use crate::models::{Post, PostCreate};

pub async fn create_post(pool: &PgPool, data: &PostCreate) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, community_id, author_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(data.content.as_deref())
    .bind(data.community_id)
    .bind(data.author_id)
    .fetch_one(pool)
    .await
}
