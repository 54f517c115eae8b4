use actix_web::{HttpResponse, web};
use log::info;
use serde_json::{Map, Value, json};

use crate::middleware::auth::{SessionKeys, create_token};
use crate::utils::error::CustomError;

/// Issue a signed session cookie for the posted identity
/// POST /session (also /jwt)
pub async fn login(
    keys: web::Data<SessionKeys>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, CustomError> {
    let payload = payload.into_inner();
    info!(
        "Issuing session token for {}",
        payload.get("email").and_then(Value::as_str).unwrap_or("<anonymous>")
    );

    let token = create_token(payload, &keys)?;

    Ok(HttpResponse::Ok()
        .cookie(keys.session_cookie(token))
        .json(json!({ "success": true })))
}

/// Expire the session cookie; fine without a session
/// POST /logout
pub async fn logout(keys: web::Data<SessionKeys>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(keys.cleared_cookie())
        .json(json!({ "success": true }))
}
