use actix_web::{HttpResponse, web};

use crate::comment::model::{Comment, CommentQuery};
use crate::comment::service::CommentService;
use crate::database::json::documents_to_json;
use crate::utils::error::CustomError;

/// Get comments, optionally for one blog
/// GET /comments?fin=
pub async fn get_comments(
    comment_service: web::Data<CommentService>,
    query: web::Query<CommentQuery>,
) -> Result<HttpResponse, CustomError> {
    let comments = comment_service.list_comments(&query).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(comments)))
}

/// Create a comment
/// POST /comments
pub async fn create_comment(
    comment_service: web::Data<CommentService>,
    body: web::Json<Comment>,
) -> Result<HttpResponse, CustomError> {
    let outcome = comment_service.add_comment(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
