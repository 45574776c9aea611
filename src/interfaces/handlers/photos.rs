use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::DEFAULT_PHOTO_LIST_LIMIT,
    entities::photo::{NewPhotoRequest, PhotosResponse, UpdatePhotoRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn get_photos(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let album_id = query
        .get("albumId")
        .map(String::as_str)
        .filter(|v| !v.is_empty());

    // limit=0 falls back to the default, like any unparseable value
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v != 0)
        .unwrap_or(DEFAULT_PHOTO_LIST_LIMIT);

    let photos = state.photo_handler.list_photos(album_id, limit).await?;

    Ok(HttpResponse::Ok().json(PhotosResponse { photos }))
}

#[instrument(skip(state, data))]
pub async fn create_photo(
    state: web::Data<AppState>,
    data: web::Json<NewPhotoRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.photo_handler.create_photo(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(photo_id, state, data))]
pub async fn update_photo(
    photo_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdatePhotoRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .photo_handler
        .update_photo(&photo_id, &data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(photo_id, state))]
pub async fn delete_photo(
    photo_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.photo_handler.delete_photo(&photo_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
