use actix_multipart::form::MultipartFormConfig;
use actix_web::http::Method;
use actix_web::web;

use crate::handlers::uploads;

// ImgBB accepts files up to 32MB, so the relay buffers up to that.
const UPLOAD_LIMIT_BYTES: usize = 32 * 1024 * 1024;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/upload")
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(UPLOAD_LIMIT_BYTES)
                    .memory_limit(UPLOAD_LIMIT_BYTES),
            )
            .route("", web::post().to(uploads::relay_upload))
            .route("", web::method(Method::OPTIONS).to(uploads::preflight))
            .default_service(web::route().to(uploads::method_not_allowed)),
    );
}
