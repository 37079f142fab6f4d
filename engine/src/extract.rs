use crate::Record;
use error::{ExportError, ExportResult};
use serde::Deserialize;
use tracing::trace;
use value::GraphDocument;

/// The `RETURN` names holding nodes and relationships, in the order they are collected per row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Bindings {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

impl Default for Bindings {
    fn default() -> Self {
        Bindings {
            nodes: vec![String::from("c"), String::from("t")],
            edges: vec![String::from("r")],
        }
    }
}

/// Folds result rows into a [`GraphDocument`].
pub struct Projection {
    bindings: Bindings,
    document: GraphDocument,
    rows: usize,
}

impl Projection {
    pub fn new(bindings: Bindings) -> Self {
        Projection {
            bindings,
            document: GraphDocument::new(),
            rows: 0,
        }
    }

    pub fn collect<I>(bindings: Bindings, records: I) -> ExportResult<GraphDocument>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut projection = Projection::new(bindings);
        for record in records {
            projection.accept(record)?;
        }
        Ok(projection.finish())
    }

    /// Unbound names are skipped, a bound name of the wrong kind fails the row.
    pub fn accept(&mut self, mut record: Record) -> ExportResult<()> {
        for name in &self.bindings.nodes {
            if let Some(entity) = record.take(name) {
                let node = entity
                    .into_node()
                    .map_err(|found| ExportError::UnexpectedKind {
                        binding: name.clone(),
                        expected: "node",
                        found: found.kind(),
                    })?;
                self.document.push_node(node);
            }
        }

        for name in &self.bindings.edges {
            if let Some(entity) = record.take(name) {
                let edge = entity
                    .into_edge()
                    .map_err(|found| ExportError::UnexpectedKind {
                        binding: name.clone(),
                        expected: "relationship",
                        found: found.kind(),
                    })?;
                self.document.push_edge(edge);
            }
        }

        self.rows += 1;
        trace!("projected row {}", self.rows);
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(self) -> GraphDocument {
        self.document
    }
}
