use super::controller::{create_review, get_reviews};
use actix_web::web;

pub fn review_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reviews")
            .route(web::get().to(get_reviews))
            .route(web::post().to(create_review)),
    );
}
