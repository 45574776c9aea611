use async_trait::async_trait;
use sqlx::{QueryBuilder, SqlitePool};

use crate::{
    entities::album::{AlbumInsert, AlbumRow, UpdateAlbumRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxAlbumRepo,
};

#[async_trait]
pub trait AlbumRepository: Send + Sync {
    async fn list_albums(&self) -> Result<Vec<AlbumRow>, AppError>;
    async fn create_album(&self, album: &AlbumInsert) -> Result<(), AppError>;
    async fn update_album(&self, id: &str, patch: &UpdateAlbumRequest) -> Result<u64, AppError>;
    async fn delete_album(&self, id: &str) -> Result<u64, AppError>;
}

impl SqlxAlbumRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxAlbumRepo { pool }
    }
}

#[async_trait]
impl AlbumRepository for SqlxAlbumRepo {
    async fn list_albums(&self) -> Result<Vec<AlbumRow>, AppError> {
        let rows = sqlx::query_as::<_, AlbumRow>(
            r#"SELECT * FROM albums ORDER BY "order" ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create_album(&self, album: &AlbumInsert) -> Result<(), AppError> {
        // The store has no boolean type; the flag lands as 0/1.
        sqlx::query(
            r#"
            INSERT INTO albums (id, name, description, cover_url, "order", is_public, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&album.id)
        .bind(&album.name)
        .bind(&album.description)
        .bind(&album.cover_url)
        .bind(album.order)
        .bind(if album.is_public { 1i64 } else { 0i64 })
        .bind(album.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_album(&self, id: &str, patch: &UpdateAlbumRequest) -> Result<u64, AppError> {
        let mut builder = QueryBuilder::new("UPDATE albums SET ");
        let mut fields = builder.separated(", ");

        if let Some(value) = patch.name.as_option() {
            fields.push("name = ").push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.description.as_option() {
            fields
                .push("description = ")
                .push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.cover_url.as_option() {
            fields
                .push("cover_url = ")
                .push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.order.as_option() {
            fields
                .push(r#""order" = "#)
                .push_bind_unseparated(value.copied());
        }
        if let Some(value) = patch.is_public.as_option() {
            fields
                .push("is_public = ")
                .push_bind_unseparated(value.map(|flag| if *flag { 1i64 } else { 0i64 }));
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete_album(&self, id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM albums WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
