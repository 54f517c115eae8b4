use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, SameSite, time::Duration as CookieDuration};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::Header;
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage, HttpRequest, web};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use jsonwebtoken::{DecodingKey, EncodingKey, Header as JwtHeader, Validation, decode, encode};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::Environment;
use crate::utils::error::CustomError;

pub const TOKEN_COOKIE: &str = "token";
pub const TOKEN_TTL_HOURS: i64 = 1;

/// Signing secret and cookie profile shared by login, logout and verification.
#[derive(Debug, Clone)]
pub struct SessionKeys {
    secret: String,
    environment: Environment,
}

impl SessionKeys {
    pub fn new(secret: impl Into<String>, environment: Environment) -> Self {
        Self {
            secret: secret.into(),
            environment,
        }
    }

    /// Cross-site attributes follow the deployment: permissive while
    /// developing, secure and strict in production.
    fn cookie_profile(&self) -> (bool, SameSite) {
        match self.environment {
            Environment::Production => (true, SameSite::Strict),
            Environment::Development => (false, SameSite::Lax),
        }
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let (secure, same_site) = self.cookie_profile();
        Cookie::build(TOKEN_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(same_site)
            .max_age(CookieDuration::hours(TOKEN_TTL_HOURS))
            .finish()
    }

    pub fn cleared_cookie(&self) -> Cookie<'static> {
        let (secure, same_site) = self.cookie_profile();
        Cookie::build(TOKEN_COOKIE, "")
            .path("/")
            .http_only(true)
            .secure(secure)
            .same_site(same_site)
            .max_age(CookieDuration::ZERO)
            .finish()
    }
}

/// Whatever the client logged in with, plus the validity window.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(Value::as_str)
    }
}

/// Sign `payload` into a token that expires after one hour.
pub fn create_token(
    mut payload: Map<String, Value>,
    keys: &SessionKeys,
) -> Result<String, CustomError> {
    payload.remove("iat");
    payload.remove("exp");

    let now = chrono::Utc::now();
    let claims = Claims {
        payload,
        iat: now.timestamp() as usize,
        exp: (now + chrono::Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
    };

    encode(
        &JwtHeader::default(),
        &claims,
        &EncodingKey::from_secret(keys.secret.as_bytes()),
    )
    .map_err(|_| CustomError::InternalServerError("Token generation failed".to_string()))
}

pub fn decode_token(token: &str, keys: &SessionKeys) -> Result<Claims, CustomError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(keys.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!("Rejected session token: {}", e);
        CustomError::UnauthorizedError("Invalid token".to_string())
    })
}

/// Cookie first; non-browser clients may send `Authorization: Bearer`.
fn token_from_request(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(TOKEN_COOKIE).filter(|c| !c.value().is_empty()) {
        return Some(cookie.value().to_string());
    }

    Authorization::<Bearer>::parse(req)
        .ok()
        .map(|auth| auth.into_scheme().token().to_string())
}

/// Rejects the request with 401 unless it carries a valid session token;
/// otherwise stores the decoded `Claims` in the request extensions.
pub async fn verify_token(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let keys = req
        .app_data::<web::Data<SessionKeys>>()
        .cloned()
        .ok_or_else(|| CustomError::InternalServerError("Session keys not configured".into()))?;

    let token = token_from_request(&req)
        .ok_or_else(|| CustomError::UnauthorizedError("Unauthorized access".into()))?;

    let claims = decode_token(&token, &keys)?;
    req.extensions_mut().insert(claims);

    next.call(req).await
}

/// Get claims from request extensions (use after `verify_token`)
pub fn get_claims_from_request(req: &HttpRequest) -> Option<Claims> {
    req.extensions().get::<Claims>().cloned()
}

/// The authenticated identity must be the owner named by `email`.
pub fn require_owner(req: &HttpRequest, email: &str) -> Result<(), CustomError> {
    let claims = get_claims_from_request(req)
        .ok_or_else(|| CustomError::UnauthorizedError("Unauthorized access".into()))?;

    match claims.email() {
        Some(owner) if owner == email => Ok(()),
        _ => Err(CustomError::ForbiddenError("Forbidden access".into())),
    }
}
