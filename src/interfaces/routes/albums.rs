use actix_web::web;

use crate::handlers::albums;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/albums")
            .route("", web::get().to(albums::get_albums))
            .route("", web::post().to(albums::create_album))
            .route("/{id}", web::put().to(albums::update_album))
            .route("/{id}", web::delete().to(albums::delete_album)),
    );
}
