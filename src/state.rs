use std::sync::Arc;

use actix_web::web;

use crate::blog::service::BlogService;
use crate::comment::service::CommentService;
use crate::database::DocumentStore;
use crate::middleware::auth::SessionKeys;
use crate::middleware::error_handler::extractor_configs;
use crate::review::service::ReviewService;
use crate::router::index::routes;
use crate::utils::error::CustomError;
use crate::wish::service::WishService;

/// Services built once around the shared store and handed to every worker.
#[derive(Clone)]
pub struct AppState {
    blogs: web::Data<BlogService>,
    comments: web::Data<CommentService>,
    wishes: web::Data<WishService>,
    reviews: web::Data<ReviewService>,
    keys: web::Data<SessionKeys>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, keys: SessionKeys) -> Self {
        Self {
            blogs: web::Data::new(BlogService::new(store.clone())),
            comments: web::Data::new(CommentService::new(store.clone())),
            wishes: web::Data::new(WishService::new(store.clone())),
            reviews: web::Data::new(ReviewService::new(store)),
            keys: web::Data::new(keys),
        }
    }

    /// Store-side setup that must exist before serving requests.
    pub async fn prepare(&self) -> Result<(), CustomError> {
        self.wishes.init_indexes().await
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.blogs.clone())
            .app_data(self.comments.clone())
            .app_data(self.wishes.clone())
            .app_data(self.reviews.clone())
            .app_data(self.keys.clone())
            .configure(extractor_configs)
            .configure(routes);
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::config::Environment;
    use crate::database::store::{DeleteOutcome, InsertOutcome, UpdateOutcome};
    use crate::database::{Filter, MemoryStore, StoreError};
    use async_trait::async_trait;
    use mongodb::bson::Document;

    pub const TEST_SECRET: &str = "test-secret";

    pub async fn memory_state() -> AppState {
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            SessionKeys::new(TEST_SECRET, Environment::Development),
        );
        state.prepare().await.unwrap();
        state
    }

    /// A backend whose every call fails, as an unreachable database would.
    pub struct FailingStore;

    fn unavailable() -> StoreError {
        StoreError::Serialization("store unavailable".to_string())
    }

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn find(&self, _: &str, _: Filter) -> Result<Vec<Document>, StoreError> {
            Err(unavailable())
        }

        async fn find_one(&self, _: &str, _: Filter) -> Result<Option<Document>, StoreError> {
            Err(unavailable())
        }

        async fn insert_one(&self, _: &str, _: Document) -> Result<InsertOutcome, StoreError> {
            Err(unavailable())
        }

        async fn update_one(
            &self,
            _: &str,
            _: Filter,
            _: Document,
            _: bool,
        ) -> Result<UpdateOutcome, StoreError> {
            Err(unavailable())
        }

        async fn delete_one(&self, _: &str, _: Filter) -> Result<DeleteOutcome, StoreError> {
            Err(unavailable())
        }

        async fn ensure_unique(&self, _: &str, _: &[&str]) -> Result<(), StoreError> {
            Err(unavailable())
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Err(unavailable())
        }
    }

    pub fn failing_state() -> AppState {
        AppState::new(
            Arc::new(FailingStore),
            SessionKeys::new(TEST_SECRET, Environment::Development),
        )
    }

    /// Full application over an in-memory store.
    macro_rules! test_app {
        ($state:expr) => {{
            let state = $state.clone();
            actix_web::test::init_service(
                actix_web::App::new()
                    .wrap(actix_web::middleware::ErrorHandlers::new().handler(
                        actix_web::http::StatusCode::NOT_FOUND,
                        crate::middleware::not_found::not_found,
                    ))
                    .configure(move |cfg| state.configure(cfg)),
            )
            .await
        }};
    }

    pub(crate) use test_app;
}
