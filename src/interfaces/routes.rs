use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::handlers::system;

mod albums;
mod content;
mod json_error;
mod photos;
mod uploads;

/// Wires the whole surface: the upload relay keeps its own per-origin CORS
/// handling, everything else sits behind the permissive wildcard policy.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(json_error::config_routes);
    cfg.configure(uploads::config_routes);

    cfg.service(
        web::scope("")
            .wrap(api_cors())
            .configure(photos::config_routes)
            .configure(albums::config_routes)
            .configure(content::config_routes)
            .route("/health", web::get().to(system::health_check))
            .default_service(web::route().to(system::not_found)),
    );
}

fn api_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}
