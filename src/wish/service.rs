use std::sync::Arc;

use log::info;
use mongodb::bson::Document;

use crate::database::store::{DeleteOutcome, InsertOutcome};
use crate::database::{DocumentStore, Filter, StoreError, parse_id};
use crate::utils::error::CustomError;
use crate::utils::helpers::{local_timestamp, non_empty, record_document};
use crate::wish::model::{Wish, WishQuery};

pub const WISH_COLLECTION: &str = "wishlist";
pub const WISH_KEY: [&str; 2] = ["title", "userEmail"];

pub struct WishService {
    store: Arc<dyn DocumentStore>,
}

/// Query and body must agree; either may supply the value.
fn resolve_key(
    name: &str,
    from_query: Option<&str>,
    from_body: Option<&str>,
) -> Result<String, CustomError> {
    match (from_query, from_body) {
        (Some(q), Some(b)) if q != b => Err(CustomError::ValidationError(format!(
            "{} in query ('{}') does not match body ('{}')",
            name, q, b
        ))),
        (Some(v), _) | (None, Some(v)) => Ok(v.to_string()),
        (None, None) => Err(CustomError::ValidationError(format!("{} is required", name))),
    }
}

impl WishService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        WishService { store }
    }

    /// One wish per (title, userEmail), enforced by the store itself.
    pub async fn init_indexes(&self) -> Result<(), CustomError> {
        self.store.ensure_unique(WISH_COLLECTION, &WISH_KEY).await?;
        Ok(())
    }

    pub async fn wishes_for(&self, user_email: &str) -> Result<Vec<Document>, CustomError> {
        Ok(self
            .store
            .find(WISH_COLLECTION, Filter::eq("userEmail", user_email))
            .await?)
    }

    pub async fn add_wish(
        &self,
        query: &WishQuery,
        mut wish: Wish,
    ) -> Result<InsertOutcome, CustomError> {
        let title = resolve_key(
            "title",
            non_empty(&query.title),
            non_empty(&wish.title),
        )?;
        let user_email = resolve_key(
            "userEmail",
            non_empty(&query.user_email),
            non_empty(&wish.user_email),
        )?;

        wish.fields.remove("createAt");
        wish.title = Some(title);
        wish.user_email = Some(user_email);
        wish.create_at = local_timestamp();

        let document = record_document(&wish)?;
        match self.store.insert_one(WISH_COLLECTION, document).await {
            Ok(outcome) => {
                info!("Added wish {} for {:?}", outcome.inserted_id, wish.user_email);
                Ok(outcome)
            }
            Err(StoreError::Duplicate(_)) => Err(CustomError::BadRequestError(
                "This blog is already in your wishlist".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn remove_wish(&self, id: &str) -> Result<DeleteOutcome, CustomError> {
        let object_id = parse_id(id)?;
        Ok(self
            .store
            .delete_one(WISH_COLLECTION, Filter::IdEq(object_id))
            .await?)
    }
}
