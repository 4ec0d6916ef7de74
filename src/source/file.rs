use crate::core::{IngestError, Result, Row, RowSource, RowStream};
use async_trait::async_trait;
use futures::stream::StreamExt;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;

/// Reads one well's measurement file as comma-delimited text with a header
/// row naming the columns. Each call to `read` reopens the file and starts
/// over from the top.
pub struct WellCsvSource {
    file_path: String,
}

impl WellCsvSource {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_string_lossy().into_owned(),
        }
    }
}

#[async_trait]
impl RowSource for WellCsvSource {
    async fn read(&self) -> Result<RowStream> {
        let file = File::open(&self.file_path).await?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header = lines
            .next_line()
            .await?
            .ok_or_else(|| IngestError::Source(anyhow::anyhow!("empty well file: {}", self.file_path)))?;

        let columns: Vec<String> = header
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let stream = LinesStream::new(lines).filter_map(move |line_result| {
            let item = match line_result {
                Ok(line) => {
                    if line.trim().is_empty() {
                        None
                    } else {
                        let mut row = Row::new();
                        for (i, value) in line.split(',').enumerate() {
                            if let Some(column) = columns.get(i) {
                                row.set(column.clone(), value.trim().to_string());
                            }
                        }
                        Some(Ok(row))
                    }
                }
                Err(e) => Some(Err(IngestError::Io(e))),
            };
            async move { item }
        });

        Ok(Box::pin(stream))
    }
}
