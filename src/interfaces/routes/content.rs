use actix_web::web;

use crate::handlers::content;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/content")
            .route("/{page}", web::get().to(content::get_content))
            .route("/{page}", web::put().to(content::put_content)),
    );
}
