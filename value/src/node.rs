use crate::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A vertex as returned by the graph, keyed by the id the database assigned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    pub id: i64,
    pub labels: Vec<String>,
    #[serde(rename = "Props")]
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    pub fn new(id: i64, labels: Vec<String>, properties: BTreeMap<String, Value>) -> Self {
        Node {
            id,
            labels,
            properties,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.labels.push(label.to_string());
        self
    }

    pub fn with_property<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

}

#[cfg(test)]
mod tests {
    use crate::{Node, Value};

    #[test]
    fn json_field_names() {
        let node = Node::new(7, vec![], Default::default())
            .with_label("customer")
            .with_property("loyalty_tier", "gold");

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Id": 7,
                "Labels": ["customer"],
                "Props": {"loyalty_tier": "gold"}
            })
        );
    }

    #[test]
    fn builder() {
        let node = Node::default().with_label("transaction").with_property("amount", 3);
        assert_eq!(node.labels, vec!["transaction"]);
        assert_eq!(node.properties.get("amount"), Some(&Value::int(3)));
        assert_eq!(node.properties.get("status"), None);
    }
}
