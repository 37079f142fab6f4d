use error::ExportResult;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use value::GraphDocument;

/// Writes a document as a single JSON object, replacing whatever the file held.
#[derive(Clone, Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        JsonFileSink { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, document: &GraphDocument) -> ExportResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, document)?;
        writer.write_all(b"\n")?;
        // BufWriter swallows errors on drop
        writer.flush()?;

        debug!(
            "wrote {} nodes and {} edges to {}",
            document.nodes.len(),
            document.edges.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn read(&self) -> ExportResult<GraphDocument> {
        let reader = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
