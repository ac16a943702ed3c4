//! Wire types for the CRM API
//!
//! Payloads are extracted leniently: a missing or malformed collection
//! degrades to empty rather than failing the whole call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A property descriptor from the object-type schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,

    /// Type tag as reported by the schema, e.g. "string" or "number"
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A single record of the configured object type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: String,

    /// Values keyed by property name; the API sends explicit nulls for
    /// properties that were requested but never set
    #[serde(default)]
    pub properties: HashMap<String, Option<String>>,
}

/// Pull the `properties` descriptor list out of a schema payload.
pub fn schema_properties(payload: &Value) -> Vec<PropertyDescriptor> {
    collect_items(payload.get("properties"))
}

/// Pull the `results` record list out of an object-collection payload.
pub fn record_results(payload: &Value) -> Vec<Record> {
    collect_items(payload.get("results"))
}

fn collect_items<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
