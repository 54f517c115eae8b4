use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use regex::RegexBuilder;
use tokio::sync::RwLock;

use super::store::{
    DeleteOutcome, DocumentStore, Filter, InsertOutcome, StoreError, UpdateOutcome,
};

#[derive(Default)]
struct MemoryCollection {
    documents: Vec<Document>,
    unique_keys: Vec<Vec<String>>,
}

impl MemoryCollection {
    fn violates_unique(&self, candidate: &Document, skip: Option<usize>) -> Option<String> {
        self.unique_keys.iter().find_map(|fields| {
            let taken = self
                .documents
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != skip)
                .any(|(_, existing)| fields.iter().all(|f| existing.get(f) == candidate.get(f)));
            taken.then(|| fields.join(", "))
        })
    }
}

/// Process-local document store with the same filter semantics as MongoDB.
///
/// Writes happen under one lock, so unique keys hold even for concurrent
/// inserts.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, MemoryCollection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Filter) -> bool {
    match filter {
        Filter::All => true,
        Filter::Eq(field, value) => document.get(field) == Some(value),
        Filter::IdEq(id) => document.get_object_id("_id").is_ok_and(|found| found == *id),
        Filter::ContainsIgnoreCase(field, text) => {
            let Ok(value) = document.get_str(field) else {
                return false;
            };
            RegexBuilder::new(&regex::escape(text))
                .case_insensitive(true)
                .build()
                .is_ok_and(|re| re.is_match(value))
        }
        Filter::And(filters) => filters.iter().all(|f| matches(document, f)),
    }
}

/// Equality parts of a filter become the seed of an upserted document.
fn seed_from_filter(filter: &Filter, seed: &mut Document) {
    match filter {
        Filter::Eq(field, value) => {
            seed.insert(field.clone(), value.clone());
        }
        Filter::IdEq(id) => {
            seed.insert("_id", *id);
        }
        Filter::And(filters) => filters.iter().for_each(|f| seed_from_filter(f, seed)),
        Filter::All | Filter::ContainsIgnoreCase(..) => {}
    }
}

fn object_id_of(document: &Document) -> String {
    match document.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|c| {
                c.documents
                    .iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.documents.iter().find(|d| matches(d, &filter)).cloned()))
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<InsertOutcome, StoreError> {
        if !document.contains_key("_id") {
            document.insert("_id", ObjectId::new());
        }

        let mut collections = self.collections.write().await;
        let target = collections.entry(collection.to_string()).or_default();

        if target
            .documents
            .iter()
            .any(|d| d.get("_id") == document.get("_id"))
        {
            return Err(StoreError::Duplicate(format!("{}._id", collection)));
        }
        if let Some(fields) = target.violates_unique(&document, None) {
            return Err(StoreError::Duplicate(format!("{}({})", collection, fields)));
        }

        let inserted_id = object_id_of(&document);
        target.documents.push(document);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut collections = self.collections.write().await;
        let target = collections.entry(collection.to_string()).or_default();

        if let Some(position) = target.documents.iter().position(|d| matches(d, &filter)) {
            let mut updated = target.documents[position].clone();
            for (key, value) in set {
                updated.insert(key, value);
            }
            if let Some(fields) = target.violates_unique(&updated, Some(position)) {
                return Err(StoreError::Duplicate(format!("{}({})", collection, fields)));
            }

            let modified = updated != target.documents[position];
            target.documents[position] = updated;
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_id: None,
                upserted_count: 0,
            });
        }

        if !upsert {
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
                upserted_id: None,
                upserted_count: 0,
            });
        }

        let mut created = Document::new();
        seed_from_filter(&filter, &mut created);
        if !created.contains_key("_id") {
            created.insert("_id", ObjectId::new());
        }
        for (key, value) in set {
            created.insert(key, value);
        }
        if let Some(fields) = target.violates_unique(&created, None) {
            return Err(StoreError::Duplicate(format!("{}({})", collection, fields)));
        }

        let upserted_id = object_id_of(&created);
        target.documents.push(created);

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(upserted_id),
            upserted_count: 1,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<DeleteOutcome, StoreError> {
        let mut collections = self.collections.write().await;
        let deleted_count = match collections.get_mut(collection) {
            Some(target) => match target.documents.iter().position(|d| matches(d, &filter)) {
                Some(position) => {
                    target.documents.remove(position);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn ensure_unique(&self, collection: &str, fields: &[&str]) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let target = collections.entry(collection.to_string()).or_default();
        let key: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        if !target.unique_keys.contains(&key) {
            target.unique_keys.push(key);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
