use super::controller::{create_comment, get_comments};
use actix_web::web;

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    for path in ["/comments", "/allComments"] {
        cfg.service(
            web::resource(path)
                .route(web::get().to(get_comments))
                .route(web::post().to(create_comment)),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::state::test_support::{memory_state, test_app};
    use actix_web::test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn comments_filter_by_parent_blog() {
        let state = memory_state().await;
        let app = test_app!(state);

        for (fin, text) in [("blog-1", "first!"), ("blog-2", "nice"), ("blog-1", "agreed")] {
            let req = test::TestRequest::post()
                .uri("/comments")
                .set_json(json!({ "fin": fin, "comment": text, "userName": "E" }))
                .to_request();
            let outcome: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(outcome["acknowledged"], true);
        }

        let req = test::TestRequest::get()
            .uri("/comments?fin=blog-1")
            .to_request();
        let thread: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let texts: Vec<&str> = thread.iter().map(|c| c["comment"].as_str().unwrap()).collect();
        assert_eq!(texts, vec!["first!", "agreed"]);
        assert!(thread.iter().all(|c| c["userName"] == "E"));

        let req = test::TestRequest::get().uri("/allComments?fin=").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 3);
    }

    #[actix_web::test]
    async fn comment_fin_is_stored_unchanged_whatever_its_type() {
        let state = memory_state().await;
        let app = test_app!(state);

        for body in [
            json!({ "fin": 42, "comment": "x" }),
            json!({ "fin": null, "comment": "y" }),
        ] {
            let req = test::TestRequest::post()
                .uri("/comments")
                .set_json(body)
                .to_request();
            let outcome: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(outcome["acknowledged"], true);
        }

        let req = test::TestRequest::get().uri("/comments").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0]["fin"], 42);
        assert!(all[1].as_object().unwrap().contains_key("fin"));
        assert_eq!(all[1]["fin"], Value::Null);
    }
}
