use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Blog post as posted by the client. Named fields may be missing; anything
/// else the client sends is kept alongside them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Author contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Author display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Blog {
    /// The seven blog fields a replacement overwrites; absent ones become null.
    pub fn replacement_fields(&self) -> Document {
        let named = [
            ("title", &self.title),
            ("photo", &self.photo),
            ("category", &self.category),
            ("shortDescription", &self.short_description),
            ("longDescription", &self.long_description),
            ("email", &self.email),
            ("name", &self.name),
        ];

        let mut set = Document::new();
        for (key, value) in named {
            set.insert(key, value.clone().map(Bson::String).unwrap_or(Bson::Null));
        }
        set
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
    pub title: Option<String>,
}
