use chrono::{DateTime, Local, TimeZone};
use mongodb::bson::{Document, to_document};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::database::StoreError;

/// Locale style wall-clock time, e.g. `10/18/2026, 3:04:05 PM`.
pub fn local_timestamp() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Client supplied fields never choose the document id.
pub fn free_form_document(mut fields: Map<String, Value>) -> Result<Document, StoreError> {
    fields.remove("_id");
    Ok(to_document(&fields)?)
}

pub fn record_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    let mut document = to_document(record)?;
    document.remove("_id");
    Ok(document)
}

/// Query parameters count only when non-empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
