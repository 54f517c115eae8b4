use std::sync::Arc;

use mongodb::bson::Document;

use crate::database::store::InsertOutcome;
use crate::database::{DocumentStore, Filter};
use crate::review::model::Review;
use crate::utils::error::CustomError;
use crate::utils::helpers::free_form_document;

pub const REVIEW_COLLECTION: &str = "reviews";

pub struct ReviewService {
    store: Arc<dyn DocumentStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        ReviewService { store }
    }

    pub async fn all_reviews(&self) -> Result<Vec<Document>, CustomError> {
        Ok(self.store.find(REVIEW_COLLECTION, Filter::All).await?)
    }

    pub async fn add_review(&self, review: Review) -> Result<InsertOutcome, CustomError> {
        let document = free_form_document(review.fields)?;
        Ok(self.store.insert_one(REVIEW_COLLECTION, document).await?)
    }
}
