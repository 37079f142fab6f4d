use crate::{Edge, Entity, Node, Value};
use neo4rs::{BoltList, BoltMap, BoltNode, BoltRelation, BoltType};
use std::collections::BTreeMap;

impl From<BoltType> for Value {
    fn from(value: BoltType) -> Self {
        match value {
            BoltType::Null(_) => Value::null(),
            BoltType::Boolean(b) => Value::bool(b.value),
            BoltType::Integer(i) => Value::int(i.value),
            BoltType::Float(f) if f.value.is_finite() => Value::float(f.value),
            // json has no NaN or infinity
            BoltType::Float(f) => Value::Text(f.value.to_string()),
            BoltType::String(s) => Value::Text(s.value),
            BoltType::List(l) => l.into(),
            BoltType::Map(m) => Value::dict(properties(m)),
            BoltType::Bytes(b) => {
                Value::array(b.value.iter().map(|b| Value::int(*b as i64)).collect())
            }
            BoltType::Node(n) => Entity::Node(n.into()).into_value(),
            BoltType::Relation(r) => Entity::Edge(r.into()).into_value(),
            // temporal, spatial and path values have no plain json form
            other => Value::Text(format!("{:?}", other)),
        }
    }
}

impl From<BoltList> for Value {
    fn from(value: BoltList) -> Self {
        Value::array(value.value.into_iter().map(Value::from).collect())
    }
}

impl From<BoltNode> for Node {
    fn from(node: BoltNode) -> Self {
        let labels = node
            .labels
            .value
            .into_iter()
            .filter_map(|l| match l {
                BoltType::String(s) => Some(s.value),
                _ => None,
            })
            .collect();

        Node::new(node.id.value, labels, properties(node.properties))
    }
}

impl From<BoltRelation> for Edge {
    fn from(rel: BoltRelation) -> Self {
        Edge {
            id: rel.id.value,
            start_id: rel.start_node_id.value,
            end_id: rel.end_node_id.value,
            type_name: rel.typ.value,
            properties: properties(rel.properties),
        }
    }
}

impl From<BoltType> for Entity {
    fn from(value: BoltType) -> Self {
        match value {
            BoltType::Node(n) => Entity::Node(n.into()),
            BoltType::Relation(r) => Entity::Edge(r.into()),
            other => Entity::Scalar(other.into()),
        }
    }
}

fn properties(map: BoltMap) -> BTreeMap<String, Value> {
    map.value
        .into_iter()
        .map(|(k, v)| (k.value, Value::from(v)))
        .collect()
}
