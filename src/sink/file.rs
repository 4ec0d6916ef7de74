use crate::core::{Result, Sample, SampleSink};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;

/// Appends each published sample as one JSON object per line. Stands in for
/// the upstream pub/sub transport; the only contract the ingestion loops rely
/// on is connect-then-publish.
pub struct JsonLinesSink {
    writer: Mutex<BufWriter<tokio::fs::File>>,
}

impl JsonLinesSink {
    /// Opens the output file for appending. This is the single fatal failure
    /// point of the program: the ingestion loops never start without a
    /// connected sink.
    pub async fn connect<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)
            .await?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

#[async_trait]
impl SampleSink for JsonLinesSink {
    async fn publish(&self, sample: Sample) -> Result<()> {
        let line = serde_json::to_string(&sample)?;

        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        // Samples arrive tens of seconds apart; flush so consumers see each
        // one as it is published.
        writer.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publishes_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.jsonl");

        let sink = JsonLinesSink::connect(&path).await.unwrap();
        sink.publish(Sample::new("well03101", "water-pressure", 12.5))
            .await
            .unwrap();
        sink.publish(Sample::new("well05601", "torque_new", 4.0))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let samples: Vec<Sample> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(
            samples,
            vec![
                Sample::new("well03101", "water-pressure", 12.5),
                Sample::new("well05601", "torque_new", 4.0),
            ]
        );
    }

    #[tokio::test]
    async fn connect_appends_to_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.jsonl");

        {
            let sink = JsonLinesSink::connect(&path).await.unwrap();
            sink.publish(Sample::new("well03101", "pump-speed", 1.0))
                .await
                .unwrap();
        }
        {
            let sink = JsonLinesSink::connect(&path).await.unwrap();
            sink.publish(Sample::new("well03101", "pump-speed", 2.0))
                .await
                .unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[tokio::test]
    async fn connect_fails_on_unwritable_path() {
        assert!(JsonLinesSink::connect("no/such/dir/samples.jsonl")
            .await
            .is_err());
    }
}
