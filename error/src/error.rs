use std::io;
use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not connect to graph: {0}")]
    Connection(String),

    #[error("error executing query: {0}")]
    Query(String),

    #[error("binding `{binding}` holds a {found}, expected a {expected}")]
    UnexpectedKind {
        binding: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("could not encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Config(err.to_string())
    }
}

impl From<neo4rs::Error> for ExportError {
    fn from(err: neo4rs::Error) -> Self {
        ExportError::Query(err.to_string())
    }
}

impl From<neo4rs::DeError> for ExportError {
    fn from(err: neo4rs::DeError) -> Self {
        ExportError::Query(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ExportError;

    #[test]
    fn kind_mismatch_names_binding() {
        let err = ExportError::UnexpectedKind {
            binding: "c".to_string(),
            expected: "node",
            found: "relationship",
        };
        assert_eq!(
            err.to_string(),
            "binding `c` holds a relationship, expected a node"
        );
    }

    #[test]
    fn io_converts() {
        let err: ExportError = std::io::Error::other("disk full").into();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
