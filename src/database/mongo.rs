use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

use super::store::{
    DeleteOutcome, DocumentStore, Filter, InsertOutcome, StoreError, UpdateOutcome,
};

const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Connects to the cluster and pings it before handing out the store.
    pub async fn init(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("blog-server".to_string());

        let client = Client::with_options(client_options)?;
        let store = Self {
            db: client.database(db_name),
        };

        store.ping().await?;
        info!("Connected successfully to MongoDB database {}", db_name);

        Ok(store)
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

pub fn filter_to_document(filter: &Filter) -> Document {
    match filter {
        Filter::All => doc! {},
        Filter::Eq(field, value) => single(field, value.clone()),
        Filter::IdEq(id) => doc! { "_id": *id },
        Filter::ContainsIgnoreCase(field, text) => single(
            field,
            doc! { "$regex": regex::escape(text), "$options": "i" },
        ),
        Filter::And(filters) if filters.is_empty() => doc! {},
        Filter::And(filters) => {
            let clauses: Vec<Document> = filters.iter().map(filter_to_document).collect();
            doc! { "$and": clauses }
        }
    }
}

fn single(field: &str, value: impl Into<Bson>) -> Document {
    let mut document = Document::new();
    document.insert(field, value);
    document
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Filter) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .collection(collection)
            .find(filter_to_document(&filter))
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collection(collection)
            .find_one(filter_to_document(&filter))
            .await?)
    }

    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<InsertOutcome, StoreError> {
        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    StoreError::Duplicate(collection.to_string())
                } else {
                    StoreError::Backend(e)
                }
            })?;

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: id_to_string(&result.inserted_id),
        })
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Filter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .collection(collection)
            .update_one(filter_to_document(&filter), doc! { "$set": set })
            .upsert(upsert)
            .await?;

        let upserted_id = result.upserted_id.as_ref().map(id_to_string);
        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Filter,
    ) -> Result<DeleteOutcome, StoreError> {
        let result = self
            .collection(collection)
            .delete_one(filter_to_document(&filter))
            .await?;

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn ensure_unique(&self, collection: &str, fields: &[&str]) -> Result<(), StoreError> {
        let mut keys = Document::new();
        for field in fields {
            keys.insert(*field, 1);
        }

        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection(collection).create_index(index).await?;
        info!("Unique index on {}({}) is in place", collection, fields.join(", "));
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
