use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form comment, stored as posted. `fin` names the blog it belongs to.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct Comment {
    pub fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommentQuery {
    pub fin: Option<String>,
}
