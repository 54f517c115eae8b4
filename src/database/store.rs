use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid document id: {0}")]
    InvalidId(String),

    #[error("document violates unique key on {0}")]
    Duplicate(String),

    #[error("failed to convert document: {0}")]
    Serialization(String),

    #[error("database error: {0}")]
    Backend(#[from] mongodb::error::Error),
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(e: mongodb::bson::ser::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Parses a client supplied id into a store-native identifier.
pub fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// Predicate over the fields of a stored document.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    Eq(String, Bson),
    IdEq(ObjectId),
    /// Case-insensitive substring match on a string field.
    ContainsIgnoreCase(String, String),
    /// Every inner filter must match; an empty list matches everything.
    And(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: &str, value: impl Into<Bson>) -> Self {
        Filter::Eq(field.to_string(), value.into())
    }

    pub fn contains_ignore_case(field: &str, text: &str) -> Self {
        Filter::ContainsIgnoreCase(field.to_string(), text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
    pub upserted_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Per-collection document operations over one shared connection.
///
/// Every call is a round trip to the backing store; failures are returned,
/// never swallowed.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, StoreError>;

    async fn find_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<Option<Document>, StoreError>;

    /// Fails with `StoreError::Duplicate` when a unique key registered via
    /// `ensure_unique` is already taken.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOutcome, StoreError>;

    /// Sets the given fields on the first match. With `upsert`, a new document
    /// built from the id in `filter` and `set` is created when nothing matches.
    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError>;

    async fn delete_one(&self, collection: &str, filter: Filter)
    -> Result<DeleteOutcome, StoreError>;

    async fn ensure_unique(&self, collection: &str, fields: &[&str]) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}
