use crate::extract::{Bindings, Projection};
use crate::{Neo4jConnection, Record};
use error::{ExportError, ExportResult};
use neo4rs::{Graph, query};
use std::fmt::Debug;
use tracing::{debug, info};
use value::GraphDocument;

/// An open connection to the graph, released when dropped.
pub struct Neo4j {
    graph: Graph,
    uri: String,
}

impl Debug for Neo4j {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Neo4j({})", self.uri)
    }
}

impl Neo4j {
    /// Connects and probes the server once, so an unreachable graph fails here
    /// and not halfway through the export.
    pub async fn connect(connection: &Neo4jConnection) -> ExportResult<Neo4j> {
        let graph = connection.graph()?;

        graph
            .run("RETURN 1")
            .await
            .map_err(|err| ExportError::Connection(err.to_string()))?;

        info!("️️☑️ Connected to {}", connection.uri);
        Ok(Neo4j {
            graph,
            uri: connection.uri.clone(),
        })
    }

    /// Runs `statement` read-only and folds every row into a document.
    pub async fn extract(&self, statement: &str, bindings: Bindings) -> ExportResult<GraphDocument> {
        debug!("running extraction query: {}", statement.trim());
        let mut rows = self.graph.execute_read(query(statement)).await?;

        let mut projection = Projection::new(bindings);
        while let Some(row) = rows.next().await? {
            projection.accept(Record::try_from(row)?)?;
        }

        info!("fetched {} rows", projection.rows());
        Ok(projection.finish())
    }

    /// Fetches at most `limit` rows as they are, without projecting them.
    pub async fn preview(&self, statement: &str, limit: usize) -> ExportResult<Vec<Record>> {
        debug!("running preview query: {}", statement.trim());
        let mut rows = self.graph.execute_read(query(statement)).await?;

        let mut records = vec![];
        while records.len() < limit {
            match rows.next().await? {
                Some(row) => records.push(Record::try_from(row)?),
                None => break,
            }
        }
        Ok(records)
    }
}
