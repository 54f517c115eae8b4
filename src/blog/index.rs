use super::controller::{create_blog, get_blog, get_blogs, update_blog};
use actix_web::web;

pub fn blog_routes(cfg: &mut web::ServiceConfig) {
    // "/allBlogs" is the path older front-ends still call.
    for prefix in ["/blogs", "/allBlogs"] {
        cfg.service(
            web::scope(prefix)
                .route("", web::get().to(get_blogs))
                .route("", web::post().to(create_blog))
                .route("/{id}", web::get().to(get_blog))
                .route("/{id}", web::put().to(update_blog)),
        );
    }
}
