pub mod config;

pub use config::{ExportConfig, PreviewConfig};

use engine::{Neo4j, Record};
use error::ExportResult;
use sink::JsonFileSink;
use tracing::{info, warn};
use value::GraphDocument;

/// Connects, optionally previews, extracts and writes the document.
///
/// The output file is only opened once the whole result has been read, so a
/// failed connection or query leaves it untouched.
pub async fn run(config: &ExportConfig) -> ExportResult<GraphDocument> {
    let document = {
        let neo = Neo4j::connect(&config.connection).await?;

        if let Some(preview) = &config.preview {
            let records = neo.preview(&preview.query, preview.limit).await?;
            info!("previewing {} rows", records.len());
            for record in &records {
                info!("{}", format_record(record));
            }
        }

        neo.extract(&config.query, config.bindings.clone()).await?
    };

    if document.is_empty() {
        warn!("query matched no nodes or edges");
    }

    JsonFileSink::new(&config.output).write(&document)?;
    Ok(document)
}

pub fn format_record(record: &Record) -> String {
    let fields = record
        .iter()
        .map(|(name, entity)| format!("{}: {}", name, entity.clone().into_value()))
        .collect::<Vec<_>>();
    format!("[{}]", fields.join(", "))
}
