use error::{ExportError, ExportResult};
use neo4rs::{ConfigBuilder, Graph};
use serde::Deserialize;

/// Where and as whom to reach the graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Neo4jConnection {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
    pub fetch_size: usize,
}

impl Default for Neo4jConnection {
    fn default() -> Self {
        Neo4jConnection {
            uri: String::from("bolt://localhost:7687"),
            user: String::from("admin"),
            password: String::from("admin"),
            database: None,
            fetch_size: 200,
        }
    }
}

impl Neo4jConnection {
    /// Builds the driver. A single connection is enough for one query.
    pub fn graph(&self) -> ExportResult<Graph> {
        let mut builder = ConfigBuilder::default()
            .uri(self.uri.as_str())
            .user(self.user.as_str())
            .password(self.password.as_str())
            .fetch_size(self.fetch_size)
            .max_connections(1);

        if let Some(db) = &self.database {
            builder = builder.db(db.as_str());
        }

        let config = builder
            .build()
            .map_err(|err| ExportError::Connection(err.to_string()))?;

        Graph::connect(config).map_err(|err| ExportError::Connection(err.to_string()))
    }
}
