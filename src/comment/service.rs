use std::sync::Arc;

use mongodb::bson::Document;

use crate::comment::model::{Comment, CommentQuery};
use crate::database::store::InsertOutcome;
use crate::database::{DocumentStore, Filter};
use crate::utils::error::CustomError;
use crate::utils::helpers::{free_form_document, non_empty};

pub const COMMENT_COLLECTION: &str = "allComments";

pub struct CommentService {
    store: Arc<dyn DocumentStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        CommentService { store }
    }

    /// All comments, or only those attached to `fin` when given.
    pub async fn list_comments(&self, query: &CommentQuery) -> Result<Vec<Document>, CustomError> {
        let filter = match non_empty(&query.fin) {
            Some(fin) => Filter::eq("fin", fin),
            None => Filter::All,
        };

        Ok(self.store.find(COMMENT_COLLECTION, filter).await?)
    }

    pub async fn add_comment(&self, comment: Comment) -> Result<InsertOutcome, CustomError> {
        let document = free_form_document(comment.fields)?;
        Ok(self.store.insert_one(COMMENT_COLLECTION, document).await?)
    }
}
