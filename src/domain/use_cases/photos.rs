use validator::Validate;

use crate::{
    entities::{
        photo::{NewPhotoRequest, Photo, UpdatePhotoRequest},
        CreatedResponse, StatusResponse,
    },
    errors::AppError,
    repositories::photo::PhotoRepository,
};

pub struct PhotoHandler<R>
where
    R: PhotoRepository,
{
    pub photo_repo: R,
}

impl<R> PhotoHandler<R>
where
    R: PhotoRepository,
{
    pub fn new(photo_repo: R) -> Self {
        PhotoHandler { photo_repo }
    }

    /// Lists photos ordered by display position, newest first within a
    /// position. Malformed stored tags fail the whole listing, the same way
    /// an uncaught parse did in the deployed service.
    pub async fn list_photos(
        &self,
        album_id: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Photo>, AppError> {
        let rows = self.photo_repo.list_photos(album_id, limit).await?;

        rows.into_iter()
            .map(|row| Photo::try_from(row).map_err(AppError::from))
            .collect()
    }

    pub async fn create_photo(
        &self,
        request: NewPhotoRequest,
    ) -> Result<CreatedResponse, AppError> {
        request.validate()?;

        let insert = request.prepare_for_insert();
        self.photo_repo.create_photo(&insert).await?;

        Ok(CreatedResponse::new(insert.id))
    }

    pub async fn update_photo(
        &self,
        id: &str,
        request: &UpdatePhotoRequest,
    ) -> Result<StatusResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::Validation("No fields to update".into()));
        }

        self.photo_repo.update_photo(id, request).await?;
        Ok(StatusResponse::ok())
    }

    /// Deleting an id that no longer exists still succeeds: the store
    /// reports zero rows affected and the caller gets the same response.
    pub async fn delete_photo(&self, id: &str) -> Result<StatusResponse, AppError> {
        self.photo_repo.delete_photo(id).await?;
        Ok(StatusResponse::ok())
    }
}
