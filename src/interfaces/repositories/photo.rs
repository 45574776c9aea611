use async_trait::async_trait;
use sqlx::{QueryBuilder, SqlitePool};

use crate::{
    entities::photo::{PhotoInsert, PhotoRow, UpdatePhotoRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxPhotoRepo,
};

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn list_photos(
        &self,
        album_id: Option<&str>,
        limit: i64,
    ) -> Result<Vec<PhotoRow>, AppError>;
    async fn create_photo(&self, photo: &PhotoInsert) -> Result<(), AppError>;
    async fn update_photo(&self, id: &str, patch: &UpdatePhotoRequest) -> Result<u64, AppError>;
    async fn delete_photo(&self, id: &str) -> Result<u64, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxPhotoRepo {
    pub fn new(pool: SqlitePool) -> Self {
        SqlxPhotoRepo { pool }
    }
}

#[async_trait]
impl PhotoRepository for SqlxPhotoRepo {
    async fn list_photos(
        &self,
        album_id: Option<&str>,
        limit: i64,
    ) -> Result<Vec<PhotoRow>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM photos");

        if let Some(album_id) = album_id {
            builder.push(" WHERE album_id = ").push_bind(album_id);
        }

        builder
            .push(r#" ORDER BY "order" ASC, created_at DESC LIMIT "#)
            .push_bind(limit);

        let rows = builder
            .build_query_as::<PhotoRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn create_photo(&self, photo: &PhotoInsert) -> Result<(), AppError> {
        let tags_json = serde_json::to_string(&photo.tags)?;

        sqlx::query(
            r#"
            INSERT INTO photos (id, url, thumbnail, title, description, album_id, tags, "order", media_type, youtube_url, concept, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&photo.id)
        .bind(&photo.url)
        .bind(&photo.thumbnail)
        .bind(&photo.title)
        .bind(&photo.description)
        .bind(&photo.album_id)
        .bind(tags_json)
        .bind(photo.order)
        .bind(photo.media_type.as_str())
        .bind(&photo.youtube_url)
        .bind(&photo.concept)
        .bind(photo.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Only the fields present in the patch enter the statement; the caller
    /// has already rejected an all-missing patch.
    async fn update_photo(&self, id: &str, patch: &UpdatePhotoRequest) -> Result<u64, AppError> {
        let tags_json = match patch.tags.as_option() {
            Some(Some(tags)) => Some(Some(serde_json::to_string(tags)?)),
            Some(None) => Some(None),
            None => None,
        };

        let mut builder = QueryBuilder::new("UPDATE photos SET ");
        let mut fields = builder.separated(", ");

        if let Some(value) = patch.url.as_option() {
            fields.push("url = ").push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.thumbnail.as_option() {
            fields.push("thumbnail = ").push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.title.as_option() {
            fields.push("title = ").push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.description.as_option() {
            fields
                .push("description = ")
                .push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.album_id.as_option() {
            fields.push("album_id = ").push_bind_unseparated(value.cloned());
        }
        if let Some(value) = tags_json {
            fields.push("tags = ").push_bind_unseparated(value);
        }
        if let Some(value) = patch.order.as_option() {
            fields
                .push(r#""order" = "#)
                .push_bind_unseparated(value.copied());
        }
        if let Some(value) = patch.media_type.as_option() {
            fields
                .push("media_type = ")
                .push_bind_unseparated(value.map(|m| m.as_str().to_string()));
        }
        if let Some(value) = patch.youtube_url.as_option() {
            fields
                .push("youtube_url = ")
                .push_bind_unseparated(value.cloned());
        }
        if let Some(value) = patch.concept.as_option() {
            fields.push("concept = ").push_bind_unseparated(value.cloned());
        }

        builder.push(" WHERE id = ").push_bind(id);

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete_photo(&self, id: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
