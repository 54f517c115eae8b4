pub mod json;
pub mod memory;
pub mod mongo;
pub mod store;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, Filter, StoreError, parse_id};
