use async_trait::async_trait;

use crate::{models::post::Post, Result};

use super::PostgresRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn find_all(&self) -> Result<Vec<Post>>;
    async fn find_by_id(&self, post_id: i64) -> Result<Option<Post>>;
    async fn create(&self, title: &str, content: &str) -> Result<Post>;
    async fn update(&self, post_id: i64, title: &str, content: &str) -> Result<Option<Post>>;
    async fn delete_by_id(&self, post_id: i64) -> Result<()>;
}

#[async_trait]
impl PostsRepository for PostgresRepo {
    async fn find_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content FROM posts
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(posts)
    }

    async fn find_by_id(&self, post_id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content FROM posts WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn create(&self, title: &str, content: &str) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content
            "#,
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(post)
    }

    async fn update(&self, post_id: i64, title: &str, content: &str) -> Result<Option<Post>> {
        let mut tx = self.pool.begin().await?;

        // Row lock so the read and the overwrite commit as one unit;
        // dropping the transaction before commit rolls it back.
        let existing = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content FROM posts WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_none() {
            return Ok(None);
        }

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content
            "#,
        )
        .bind(post_id)
        .bind(title)
        .bind(content)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(post))
    }

    async fn delete_by_id(&self, post_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM posts WHERE id = $1
            "#,
        )
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
