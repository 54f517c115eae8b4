use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Wishlist entry as posted by the client. `createAt` is always stamped by
/// the server.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Wish {
    pub title: Option<String>,
    pub user_email: Option<String>,
    #[serde(skip_deserializing)]
    pub create_at: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishQuery {
    pub title: Option<String>,
    pub user_email: Option<String>,
}
