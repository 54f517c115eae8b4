use actix_web::{HttpRequest, HttpResponse, web};

use crate::database::json::documents_to_json;
use crate::middleware::auth::require_owner;
use crate::utils::error::CustomError;
use crate::utils::helpers::non_empty;
use crate::wish::model::{Wish, WishQuery};
use crate::wish::service::WishService;

/// Wishlist of the logged-in user
/// GET /wishes?userEmail=
pub async fn get_wishes(
    req: HttpRequest,
    wish_service: web::Data<WishService>,
    query: web::Query<WishQuery>,
) -> Result<HttpResponse, CustomError> {
    let user_email = non_empty(&query.user_email)
        .ok_or_else(|| CustomError::ValidationError("userEmail is required".to_string()))?;

    require_owner(&req, user_email)?;

    let wishes = wish_service.wishes_for(user_email).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(wishes)))
}

/// POST /wishes?title=&userEmail=
pub async fn create_wish(
    wish_service: web::Data<WishService>,
    query: web::Query<WishQuery>,
    body: web::Json<Wish>,
) -> Result<HttpResponse, CustomError> {
    let outcome = wish_service.add_wish(&query, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// DELETE /wishes/{id}
pub async fn delete_wish(
    wish_service: web::Data<WishService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let outcome = wish_service.remove_wish(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
