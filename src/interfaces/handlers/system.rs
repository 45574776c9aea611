use actix_web::{web, HttpResponse, Responder, ResponseError};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{
    constants::START_TIME, errors::AppError, repositories::photo::PhotoRepository, AppState,
};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    timestamp: String,
    version: String,
    uptime: String,
    database: String,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now();
    let uptime = now.signed_duration_since(*START_TIME);
    let human_uptime =
        format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let database = match state.photo_handler.photo_repo.check_connection().await {
        Ok(_) => "ok",
        Err(_) => "unavailable",
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "ok".to_string(),
        timestamp: now.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: human_uptime.to_string(),
        database: database.to_string(),
    })
}

/// Catch-all for unmatched method+path combinations.
pub async fn not_found() -> HttpResponse {
    AppError::NotFound.error_response()
}
