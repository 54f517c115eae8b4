use crate::blog::index::blog_routes;
use crate::comment::index::comment_routes;
use crate::review::index::review_routes;
use crate::session::index::session_routes;
use crate::wish::index::wish_routes;
use actix_web::{HttpResponse, Responder, get, web};

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().body("Blog server is running")
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(default);
    cfg.configure(session_routes);
    cfg.configure(blog_routes);
    cfg.configure(comment_routes);
    cfg.configure(wish_routes);
    cfg.configure(review_routes);
}
