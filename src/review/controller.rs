use actix_web::{HttpResponse, web};

use crate::database::json::documents_to_json;
use crate::review::model::Review;
use crate::review::service::ReviewService;
use crate::utils::error::CustomError;

pub async fn get_reviews(
    review_service: web::Data<ReviewService>,
) -> Result<HttpResponse, CustomError> {
    let reviews = review_service.all_reviews().await?;
    Ok(HttpResponse::Ok().json(documents_to_json(reviews)))
}

pub async fn create_review(
    review_service: web::Data<ReviewService>,
    body: web::Json<Review>,
) -> Result<HttpResponse, CustomError> {
    let outcome = review_service.add_review(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
