use super::controller::{login, logout};
use actix_web::web;

pub fn session_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/session", web::post().to(login))
        .route("/jwt", web::post().to(login))
        .route("/logout", web::post().to(logout));
}

#[cfg(test)]
mod tests {
    use crate::middleware::auth::TOKEN_COOKIE;
    use crate::state::test_support::{memory_state, test_app};
    use actix_web::cookie::time::Duration;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn login_cookie_unlocks_own_wishlist() {
        let state = memory_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/session")
            .set_json(json!({ "email": "e@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("session cookie")
            .into_owned();
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::hours(1)));

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=e@x.com")
            .cookie(cookie)
            .to_request();
        let wishes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(wishes.is_empty());
    }

    #[actix_web::test]
    async fn jwt_path_is_an_alias_for_login() {
        let state = memory_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/jwt")
            .set_json(json!({ "email": "e@x.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.response().cookies().any(|c| c.name() == TOKEN_COOKIE));
    }

    #[actix_web::test]
    async fn login_requires_an_object_payload() {
        let state = memory_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/session")
            .set_json(json!(["e@x.com"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn logout_expires_cookie_even_without_session() {
        let state = memory_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post().uri("/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("cleared cookie")
            .into_owned();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
    }
}
