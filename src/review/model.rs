use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reader feedback; stored exactly as posted.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct Review {
    pub fields: Map<String, Value>,
}
