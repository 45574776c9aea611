use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(page, state))]
pub async fn get_content(
    page: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let response = state.content_handler.get_content(&page).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(page, state, data))]
pub async fn put_content(
    page: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<serde_json::Value>,
) -> Result<impl Responder, AppError> {
    let response = state
        .content_handler
        .put_content(&page, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
