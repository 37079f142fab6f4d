use crate::{Edge, Node, Value};

/// A single bound value of a result row, tagged by what the graph returned.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Node(Node),
    Edge(Edge),
    Scalar(Value),
}

impl Entity {
    pub fn kind(&self) -> &'static str {
        match self {
            Entity::Node(_) => "node",
            Entity::Edge(_) => "relationship",
            Entity::Scalar(Value::Null) => "null",
            Entity::Scalar(_) => "value",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Entity::Scalar(Value::Null))
    }

    /// Hands back the entity unchanged if it is not a node.
    pub fn into_node(self) -> Result<Node, Entity> {
        match self {
            Entity::Node(node) => Ok(node),
            other => Err(other),
        }
    }

    pub fn into_edge(self) -> Result<Edge, Entity> {
        match self {
            Entity::Edge(edge) => Ok(edge),
            other => Err(other),
        }
    }

    /// Flattens the entity into a plain value, used when rows are only displayed.
    pub fn into_value(self) -> Value {
        match self {
            Entity::Node(n) => Value::dict_from_pairs(vec![
                ("id", n.id.into()),
                (
                    "labels",
                    Value::array(n.labels.into_iter().map(Value::from).collect()),
                ),
                ("props", Value::dict(n.properties)),
            ]),
            Entity::Edge(e) => Value::dict_from_pairs(vec![
                ("id", e.id.into()),
                ("type", e.type_name.into()),
                ("start", e.start_id.into()),
                ("end", e.end_id.into()),
                ("props", Value::dict(e.properties)),
            ]),
            Entity::Scalar(v) => v,
        }
    }
}

impl From<Node> for Entity {
    fn from(value: Node) -> Self {
        Entity::Node(value)
    }
}

impl From<Edge> for Entity {
    fn from(value: Edge) -> Self {
        Entity::Edge(value)
    }
}

impl From<Value> for Entity {
    fn from(value: Value) -> Self {
        Entity::Scalar(value)
    }
}
