use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::blog::model::{Blog, BlogQuery};
use crate::blog::service::BlogService;
use crate::database::json::{document_to_json, documents_to_json};
use crate::utils::error::CustomError;

/// GET /blogs?category=&title=
pub async fn get_blogs(
    blog_service: web::Data<BlogService>,
    query: web::Query<BlogQuery>,
) -> Result<HttpResponse, CustomError> {
    let blogs = blog_service.list_blogs(&query).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(blogs)))
}

/// GET /blogs/{id}
pub async fn get_blog(
    blog_service: web::Data<BlogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let blog = blog_service.get_blog(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(blog.map(document_to_json).unwrap_or(Value::Null)))
}

/// POST /blogs
pub async fn create_blog(
    blog_service: web::Data<BlogService>,
    body: web::Json<Blog>,
) -> Result<HttpResponse, CustomError> {
    let outcome = blog_service.create_blog(&body).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// PUT /blogs/{id}
pub async fn update_blog(
    blog_service: web::Data<BlogService>,
    path: web::Path<String>,
    body: web::Json<Blog>,
) -> Result<HttpResponse, CustomError> {
    let outcome = blog_service.replace_blog(&path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
