use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::{
    entities::site_content::{ContentUpsert, SiteContentRow},
    errors::AppError,
    repositories::sqlx_repo::SqlxContentRepo,
};

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn get_content(&self, page: &str) -> Result<Option<SiteContentRow>, AppError>;
    async fn upsert_content(&self, upsert: &ContentUpsert) -> Result<(), AppError>;
}

impl SqlxContentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxContentRepo { pool }
    }
}

#[async_trait]
impl ContentRepository for SqlxContentRepo {
    async fn get_content(&self, page: &str) -> Result<Option<SiteContentRow>, AppError> {
        let row = sqlx::query_as::<_, SiteContentRow>(
            "SELECT * FROM site_content WHERE id = ?",
        )
        .bind(page)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn upsert_content(&self, upsert: &ContentUpsert) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO site_content (id, content, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET content = excluded.content, updated_at = excluded.updated_at
            "#,
        )
        .bind(&upsert.id)
        .bind(&upsert.content)
        .bind(upsert.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
