use crate::config::WellSource;
use crate::core::{COLUMN_MAPPINGS, IngestError, Result, RowSource, Sample, SampleSink};
use crate::source::WellCsvSource;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Publish cadence between rows, not a timeout.
pub const ROW_DELAY: Duration = Duration::from_secs(30);

/// Drives one well: reopen the file, walk its rows, publish every mapped
/// non-empty field, sleep between rows, and start over from the top on any
/// failure or on end of file.
pub struct IngestLoop {
    sink: Arc<dyn SampleSink>,
    source: WellSource,
    row_delay: Duration,
}

impl IngestLoop {
    pub fn new(sink: Arc<dyn SampleSink>, source: WellSource) -> Self {
        Self {
            sink,
            source,
            row_delay: ROW_DELAY,
        }
    }

    pub fn with_row_delay(mut self, row_delay: Duration) -> Self {
        self.row_delay = row_delay;
        self
    }

    /// Never returns in normal operation. Every error is non-fatal here: the
    /// pass restarts from the top of the file, immediately and without limit.
    /// A clean end of file restarts the same way, so the file's samples are
    /// republished indefinitely.
    pub async fn run(self) {
        loop {
            if let Err(error) = self.scan_once().await {
                warn!(
                    asset = %self.source.asset_name,
                    %error,
                    "failed to read and publish, restarting"
                );
            }
        }
    }

    /// One full pass over the file. Any error aborts the pass; no partial-row
    /// state survives.
    pub async fn scan_once(&self) -> Result<()> {
        let source = WellCsvSource::new(&self.source.file_path);
        let mut rows = source.read().await?;

        while let Some(row) = rows.next().await {
            let row = row?;

            info!(asset = %self.source.asset_name, "publishing row samples");
            for mapping in &COLUMN_MAPPINGS {
                let Some(raw) = row.get(mapping.source_column) else {
                    continue;
                };
                if raw.is_empty() {
                    continue;
                }

                let value: f64 = raw.parse().map_err(|_| IngestError::Parse {
                    column: mapping.source_column.to_string(),
                    value: raw.to_string(),
                })?;

                self.sink
                    .publish(Sample::new(
                        self.source.asset_name.clone(),
                        mapping.stream_name,
                        value,
                    ))
                    .await?;
            }

            info!(asset = %self.source.asset_name, "entering inter-row delay");
            tokio::time::sleep(self.row_delay).await;
        }

        Ok(())
    }
}
