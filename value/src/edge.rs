use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A directed, typed relationship between two nodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Edge {
    pub id: i64,
    pub start_id: i64,
    pub end_id: i64,
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Props")]
    pub properties: BTreeMap<String, Value>,
}

impl Edge {
    pub fn new(id: i64, type_name: &str, start_id: i64, end_id: i64) -> Self {
        Edge {
            id,
            start_id,
            end_id,
            type_name: type_name.to_string(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }
}
