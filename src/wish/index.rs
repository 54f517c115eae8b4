use super::controller::{create_wish, delete_wish, get_wishes};
use crate::middleware::auth::verify_token;
use actix_web::middleware::from_fn;
use actix_web::{guard, web};

pub fn wish_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/wishes")
            .guard(guard::Get())
            .wrap(from_fn(verify_token))
            .route(web::get().to(get_wishes)),
    )
    .service(web::resource("/wishes").route(web::post().to(create_wish)))
    .service(web::resource("/wishes/{id}").route(web::delete().to(delete_wish)));
}

#[cfg(test)]
mod tests {
    use crate::config::Environment;
    use crate::middleware::auth::{SessionKeys, TOKEN_COOKIE, create_token};
    use crate::state::test_support::{TEST_SECRET, memory_state, test_app};
    use actix_web::cookie::Cookie;
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use serde_json::{Value, json};

    fn token_for(email: &str) -> String {
        let keys = SessionKeys::new(TEST_SECRET, Environment::Development);
        let payload = json!({ "email": email }).as_object().cloned().unwrap();
        create_token(payload, &keys).unwrap()
    }

    fn wish(title: &str, email: &str) -> Value {
        json!({ "title": title, "userEmail": email, "photo": "p" })
    }

    #[actix_web::test]
    async fn duplicate_wish_is_rejected_without_second_insert() {
        let state = memory_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/wishes?title=A&userEmail=b@x.com")
            .set_json(wish("A", "b@x.com"))
            .to_request();
        let outcome: Value = test::call_and_read_body_json(&app, req).await;
        assert!(outcome["insertedId"].as_str().is_some());

        let req = test::TestRequest::post()
            .uri("/wishes?title=A&userEmail=b@x.com")
            .set_json(wish("A", "b@x.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("already in your wishlist"));

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=b@x.com")
            .cookie(Cookie::new(TOKEN_COOKIE, token_for("b@x.com")))
            .to_request();
        let wishes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(wishes.len(), 1);
        assert!(!wishes[0]["createAt"].as_str().unwrap().is_empty());
        assert_eq!(wishes[0]["photo"], "p");
    }

    #[actix_web::test]
    async fn client_cannot_choose_creation_time() {
        let state = memory_state().await;
        let app = test_app!(state);

        let mut body = wish("A", "b@x.com");
        body["createAt"] = json!("1/1/1970, 12:00:00 AM");
        let req = test::TestRequest::post().uri("/wishes").set_json(body).to_request();
        assert!(test::call_service(&app, req).await.status().is_success());

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=b@x.com")
            .cookie(Cookie::new(TOKEN_COOKIE, token_for("b@x.com")))
            .to_request();
        let wishes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_ne!(wishes[0]["createAt"], "1/1/1970, 12:00:00 AM");
    }

    #[actix_web::test]
    async fn mismatched_query_and_body_is_a_validation_error() {
        let state = memory_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/wishes?title=A&userEmail=someone@else.com")
            .set_json(wish("A", "b@x.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn wishlist_read_requires_matching_session() {
        let state = memory_state().await;
        let app = test_app!(state);

        for (title, email) in [("A", "b@x.com"), ("B", "b@x.com"), ("A", "c@x.com")] {
            let req = test::TestRequest::post()
                .uri("/wishes")
                .set_json(wish(title, email))
                .to_request();
            assert!(test::call_service(&app, req).await.status().is_success());
        }

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=b@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=b@x.com")
            .cookie(Cookie::new(TOKEN_COOKIE, "garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=b@x.com")
            .cookie(Cookie::new(TOKEN_COOKIE, token_for("c@x.com")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=b@x.com")
            .cookie(Cookie::new(TOKEN_COOKIE, token_for("b@x.com")))
            .to_request();
        let wishes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(wishes.len(), 2);
        assert!(wishes.iter().all(|w| w["userEmail"] == "b@x.com"));

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=c@x.com")
            .insert_header((
                header::AUTHORIZATION,
                format!("Bearer {}", token_for("c@x.com")),
            ))
            .to_request();
        let wishes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(wishes.len(), 1);
    }

    #[actix_web::test]
    async fn delete_removes_exactly_one_wish() {
        let state = memory_state().await;
        let app = test_app!(state);

        let mut ids = Vec::new();
        for title in ["A", "B"] {
            let req = test::TestRequest::post()
                .uri("/wishes")
                .set_json(wish(title, "b@x.com"))
                .to_request();
            let outcome: Value = test::call_and_read_body_json(&app, req).await;
            ids.push(outcome["insertedId"].as_str().unwrap().to_string());
        }

        let req = test::TestRequest::delete()
            .uri(&format!("/wishes/{}", ids[0]))
            .to_request();
        let outcome: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(outcome["deletedCount"], 1);

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=b@x.com")
            .cookie(Cookie::new(TOKEN_COOKIE, token_for("b@x.com")))
            .to_request();
        let wishes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(wishes.len(), 1);
        assert_eq!(wishes[0]["_id"], ids[1].as_str());

        let req = test::TestRequest::delete()
            .uri("/wishes/12345")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn concurrent_identical_wishes_store_one() {
        let state = memory_state().await;
        let app = test_app!(state);

        let post = || {
            test::TestRequest::post()
                .uri("/wishes")
                .set_json(wish("Same", "c@x.com"))
                .to_request()
        };
        let (first, second) = futures_util::join!(
            test::call_service(&app, post()),
            test::call_service(&app, post())
        );

        let mut statuses = vec![first.status(), second.status()];
        statuses.sort();
        assert_eq!(statuses, vec![StatusCode::OK, StatusCode::BAD_REQUEST]);

        let req = test::TestRequest::get()
            .uri("/wishes?userEmail=c@x.com")
            .cookie(Cookie::new(TOKEN_COOKIE, token_for("c@x.com")))
            .to_request();
        let wishes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(wishes.len(), 1);
    }
}
