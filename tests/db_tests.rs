mod common;

#[cfg(test)]
pub mod db_tests {
    use chrono::{Duration, Utc};
    use sqlx::PgPool;
    use uuid::Uuid;

    use super::common::*;

    use breadit::common::*;
    use breadit::db::*;
    use breadit::models::*;
    use breadit::services::{EntityStore, SessionStore};

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_migration_integrity(pool: PgPool) {
        let db = Database::from_pool(pool);

        let cats = db
            .find_community_by_name("cats")
            .await
            .expect("Failed database query");
        assert_eq!(cats, Some(get_seed_community_cats()));

        let alice = db
            .find_user_by_email("alice@test.com")
            .await
            .expect("Failed database query")
            .expect("alice should be seeded");
        assert_eq!(alice.id, get_seed_user_alice().id);
        assert_eq!(alice.created_at, get_seed_user_alice().created_at);
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_find_community_by_name_is_exact(pool: PgPool) {
        let db = Database::from_pool(pool);

        assert!(db.find_community_by_name("does-not-exist").await.unwrap().is_none());
        assert!(db.find_community_by_name("").await.unwrap().is_none());
        assert!(db.find_community_by_name("Cats").await.unwrap().is_none());
        assert!(db.find_community_by_name("cat").await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_find_community_by_name_reports_duplicates(pool: PgPool) {
        sqlx::query("ALTER TABLE communities DROP CONSTRAINT communities_name_key")
            .execute(&pool)
            .await
            .expect("Failed to drop unique constraint");
        sqlx::query("INSERT INTO communities (name) VALUES ('cats')")
            .execute(&pool)
            .await
            .expect("Failed to insert duplicate");

        let db = Database::from_pool(pool);
        let result = db.find_community_by_name("cats").await;

        assert!(matches!(result, Err(StoreError::Ambiguous(CommunityIden::Name(ref n))) if n == "cats"));
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_community_names_are_unique(pool: PgPool) {
        let result = sqlx::query("INSERT INTO communities (name) VALUES ('cats')")
            .execute(&pool)
            .await;

        match result {
            Err(sqlx::Error::Database(db_err)) => {
                assert_eq!(db_err.code().as_deref(), Some("23505"))
            }
            other => panic!("Expected unique violation, got {other:?}"),
        }
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_search_communities_by_prefix(pool: PgPool) {
        let db = Database::from_pool(pool);

        let found = db.search_communities("CAT", 5).await.unwrap();
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["catalysts", "cats"]);

        let limited = db.search_communities("cat", 1).await.unwrap();
        assert_eq!(limited.len(), 1);

        assert!(db.search_communities("%", 5).await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_recent_communities_newest_first(pool: PgPool) {
        let db = Database::from_pool(pool);

        let recent = db.recent_communities(2).await.unwrap();
        let names: Vec<&str> = recent.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["dogs", "catalysts"]);
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_session_lifecycle(pool: PgPool) {
        let db = Database::from_pool(pool.clone());
        let now = Utc::now();

        let live = db.find_session_user(ALICE_TOKEN, now).await.unwrap();
        assert_eq!(live.map(|u| u.email), Some("alice@test.com".to_string()));

        let expired = db.find_session_user(EXPIRED_TOKEN, now).await.unwrap();
        assert!(expired.is_none());

        let bob = get_seed_user_bob();
        let record = db
            .create_session(bob.id, now + Duration::days(1))
            .await
            .unwrap();
        assert_eq!(record.user_id, bob.id);

        let found = db.find_session_user(record.token, now).await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(bob.id));

        db.delete_session(record.token).await.unwrap();
        assert!(db.find_session_user(record.token, now).await.unwrap().is_none());

        let purged = purge_expired_sessions(&pool, now).await.unwrap();
        assert_eq!(purged, 1);
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_find_user_by_email_ignores_case(pool: PgPool) {
        let db = Database::from_pool(pool);

        let user = db.find_user_by_email("ALICE@test.com").await.unwrap();
        assert_eq!(user.map(|u| u.id), Some(get_seed_user_alice().id));

        assert!(db.find_user_by_email("nobody@test.com").await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_create_post(pool: PgPool) {
        let db = Database::from_pool(pool);
        let cats = get_seed_community_cats();
        let alice = get_seed_user_alice();

        let data = PostCreate::new("Hello cats", Some("First!"), cats.id, alice.id).unwrap();

        let start = Utc::now();
        let post = db.create_post(&data).await.expect("Failed to create post");

        assert_eq!(post.title, "Hello cats");
        assert_eq!(post.content.as_deref(), Some("First!"));
        assert_eq!(post.community_id, cats.id);
        assert_eq!(post.author_id, alice.id);
        assert_eq!(post.created_at, post.updated_at);
        assert!(post.created_at >= start - Duration::seconds(1));
    }

    #[sqlx::test(migrations = "./tests/migrations")]
    #[ignore = "requires DATABASE_URL pointing at a Postgres server"]
    async fn test_create_post_fails_on_unknown_community(pool: PgPool) {
        let db = Database::from_pool(pool);
        let data = PostCreate::new(
            "Hello nobody",
            None,
            Uuid::from_u128(0xff),
            get_seed_user_alice().id,
        )
        .unwrap();

        let result = db.create_post(&data).await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }
}
