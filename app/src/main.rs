use anyhow::Context;
use graph_export::{run, ExportConfig};
use std::process;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use value::GraphDocument;

#[tokio::main]
async fn main() {
    setup_logging();

    match export().await {
        Ok(document) => info!(
            "Done: {} nodes, {} edges",
            document.nodes.len(),
            document.edges.len()
        ),
        Err(err) => {
            error!("{:#}", err);
            process::exit(1);
        }
    }
}

async fn export() -> anyhow::Result<GraphDocument> {
    let config = ExportConfig::load().context("could not load configuration")?;
    let document = run(&config).await?;
    info!("exported graph to {}", config.output.display());
    Ok(document)
}

fn setup_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
