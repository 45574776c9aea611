use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::album::{AlbumsResponse, NewAlbumRequest, UpdateAlbumRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_albums(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let albums = state.album_handler.list_albums().await?;

    Ok(HttpResponse::Ok().json(AlbumsResponse { albums }))
}

#[instrument(skip(state, data))]
pub async fn create_album(
    state: web::Data<AppState>,
    data: web::Json<NewAlbumRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.album_handler.create_album(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(album_id, state, data))]
pub async fn update_album(
    album_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateAlbumRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .album_handler
        .update_album(&album_id, &data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(album_id, state))]
pub async fn delete_album(
    album_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.album_handler.delete_album(&album_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
