use actix_web::web;

use crate::handlers::photos;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/photos")
            .route("", web::get().to(photos::get_photos))
            .route("", web::post().to(photos::create_photo))
            .route("/{id}", web::put().to(photos::update_photo))
            .route("/{id}", web::delete().to(photos::delete_photo)),
    );
}
