use validator::Validate;

use crate::{
    entities::{
        album::{Album, NewAlbumRequest, UpdateAlbumRequest},
        CreatedResponse, StatusResponse,
    },
    errors::AppError,
    repositories::album::AlbumRepository,
};

pub struct AlbumHandler<R>
where
    R: AlbumRepository,
{
    pub album_repo: R,
}

impl<R> AlbumHandler<R>
where
    R: AlbumRepository,
{
    pub fn new(album_repo: R) -> Self {
        AlbumHandler { album_repo }
    }

    pub async fn list_albums(&self) -> Result<Vec<Album>, AppError> {
        let rows = self.album_repo.list_albums().await?;
        Ok(rows.into_iter().map(Album::from).collect())
    }

    pub async fn create_album(
        &self,
        request: NewAlbumRequest,
    ) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert();
        self.album_repo.create_album(&insert).await?;

        Ok(CreatedResponse::new(insert.id))
    }

    pub async fn update_album(
        &self,
        id: &str,
        request: &UpdateAlbumRequest,
    ) -> Result<StatusResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::Validation("No fields to update".into()));
        }

        self.album_repo.update_album(id, request).await?;
        Ok(StatusResponse::ok())
    }

    /// Photos keep whatever album_id they carried; the store enforces no
    /// referential integrity, so deleting an album strands its references.
    pub async fn delete_album(&self, id: &str) -> Result<StatusResponse, AppError> {
        self.album_repo.delete_album(id).await?;
        Ok(StatusResponse::ok())
    }
}
