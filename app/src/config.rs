use engine::{Bindings, Neo4jConnection};
use error::ExportResult;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE: &str = "graph-export.toml";

pub const DEFAULT_QUERY: &str = "
    USING enableCypherEngineProperties 'true'
    MATCH (c:customer)-[r:creates]->(t:transaction)
    WHERE t.payment_method = 'debit_card' and t.status = 'failed'
    RETURN
      c, r, t
    ORDER BY t.transaction_id
    LIMIT 10
    ";

pub const DEFAULT_OUTPUT: &str = "graph-data.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub connection: Neo4jConnection,
    pub query: String,
    pub bindings: Bindings,
    pub output: PathBuf,
    pub preview: Option<PreviewConfig>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            connection: Neo4jConnection::default(),
            query: String::from(DEFAULT_QUERY),
            bindings: Bindings::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview: None,
        }
    }
}

/// A scalar query whose rows are only logged.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PreviewConfig {
    pub query: String,
    #[serde(default = "default_preview_limit")]
    pub limit: usize,
}

fn default_preview_limit() -> usize {
    100
}

impl ExportConfig {
    /// Reads `graph-export.toml` from the working directory if there is one.
    pub fn load() -> ExportResult<ExportConfig> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> ExportResult<ExportConfig> {
        if !path.exists() {
            return Ok(ExportConfig::default());
        }
        info!("loading configuration from {}", path.display());
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn parse(content: &str) -> ExportResult<ExportConfig> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportConfig, DEFAULT_OUTPUT, DEFAULT_QUERY};
    use error::ExportError;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.connection.uri, "bolt://localhost:7687");
        assert_eq!(config.query, DEFAULT_QUERY);
        assert!(config.query.contains("LIMIT 10"));
        assert_eq!(config.bindings.nodes, vec!["c", "t"]);
        assert_eq!(config.bindings.edges, vec!["r"]);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.preview.is_none());
    }

    #[test]
    fn partial_file_overrides_only_its_keys() {
        let config = ExportConfig::parse(
            r#"
            output = "out/failed.json"

            [connection]
            uri = "bolt://graph:7687"
            password = "secret"

            [preview]
            query = "MATCH (n:customer) RETURN n.email"
            "#,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("out/failed.json"));
        assert_eq!(config.connection.uri, "bolt://graph:7687");
        assert_eq!(config.connection.user, "admin");
        assert_eq!(config.connection.password, "secret");
        assert_eq!(config.query, DEFAULT_QUERY);
        let preview = config.preview.unwrap();
        assert_eq!(preview.limit, 100);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = ExportConfig::parse("output = [").unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));

        let err = ExportConfig::parse("[connection]\nfetch_size = \"many\"").unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
    }

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::load_from(&dir.path().join("graph-export.toml")).unwrap();
        assert_eq!(config, ExportConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph-export.toml");
        fs::write(&path, "[bindings]\nnodes = [\"n\"]\nedges = []\n").unwrap();

        let config = ExportConfig::load_from(&path).unwrap();
        assert_eq!(config.bindings.nodes, vec!["n"]);
        assert!(config.bindings.edges.is_empty());
    }
}
