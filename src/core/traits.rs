use crate::core::{Result, Row, Sample};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

pub type RowStream = Pin<Box<dyn Stream<Item = Result<Row>> + Send>>;

/// Produces the data rows of one well file, in file order.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn read(&self) -> Result<RowStream>;
}

/// The external publish boundary. One connected sink handle is shared by all
/// ingestion loops, so implementations must tolerate concurrent callers.
#[async_trait]
pub trait SampleSink: Send + Sync {
    async fn publish(&self, sample: Sample) -> Result<()>;
}
