use engine::Neo4jConnection;
use error::ExportError;
use graph_export::{run, ExportConfig};
use std::fs;
use tracing_test::traced_test;

fn unreachable(output: std::path::PathBuf) -> ExportConfig {
    ExportConfig {
        connection: Neo4jConnection {
            uri: String::from("bolt://127.0.0.1:1"),
            ..Default::default()
        },
        output,
        ..Default::default()
    }
}

#[tokio::test]
#[traced_test]
async fn connection_failure_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("graph-data.json");

    let err = run(&unreachable(output.clone())).await.unwrap_err();

    assert!(matches!(err, ExportError::Connection(_)));
    assert!(!output.exists());
}

#[tokio::test]
#[traced_test]
async fn connection_failure_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("graph-data.json");
    fs::write(&output, "{\"Nodes\":[],\"Edges\":[]}\n").unwrap();

    assert!(run(&unreachable(output.clone())).await.is_err());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "{\"Nodes\":[],\"Edges\":[]}\n"
    );
}
