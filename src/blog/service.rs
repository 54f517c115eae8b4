use std::sync::Arc;

use mongodb::bson::Document;

use crate::blog::model::{Blog, BlogQuery};
use crate::database::store::{InsertOutcome, UpdateOutcome};
use crate::database::{DocumentStore, Filter, parse_id};
use crate::utils::error::CustomError;
use crate::utils::helpers::{non_empty, record_document};

pub const BLOG_COLLECTION: &str = "allBlogs";

pub struct BlogService {
    store: Arc<dyn DocumentStore>,
}

impl BlogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        BlogService { store }
    }

    /// A title search replaces the category filter when both are given.
    pub fn filter_for(query: &BlogQuery) -> Filter {
        let mut filter = Filter::All;
        if let Some(category) = non_empty(&query.category) {
            filter = Filter::eq("category", category);
        }
        if let Some(title) = non_empty(&query.title) {
            filter = Filter::contains_ignore_case("title", title);
        }
        filter
    }

    pub async fn list_blogs(&self, query: &BlogQuery) -> Result<Vec<Document>, CustomError> {
        Ok(self
            .store
            .find(BLOG_COLLECTION, Self::filter_for(query))
            .await?)
    }

    pub async fn get_blog(&self, id: &str) -> Result<Option<Document>, CustomError> {
        let object_id = parse_id(id)?;
        Ok(self
            .store
            .find_one(BLOG_COLLECTION, Filter::IdEq(object_id))
            .await?)
    }

    /// Inserts the posted document as-is, extra fields included.
    pub async fn create_blog(&self, blog: &Blog) -> Result<InsertOutcome, CustomError> {
        let document = record_document(blog)?;
        Ok(self.store.insert_one(BLOG_COLLECTION, document).await?)
    }

    /// Overwrites the named blog fields, creating the post under `id` if absent.
    pub async fn replace_blog(&self, id: &str, blog: &Blog) -> Result<UpdateOutcome, CustomError> {
        let object_id = parse_id(id)?;
        let fields = blog.replacement_fields();
        Ok(self
            .store
            .update_one(BLOG_COLLECTION, Filter::IdEq(object_id), fields, true)
            .await?)
    }
}
