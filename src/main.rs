use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wellfeed::{Config, IngestLoop, SampleSink, sink::JsonLinesSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wellfeed.json".to_string());
    let config = Config::load_or_default(&config_path)?;

    // Sink connection is the one fatal failure: no loop starts without it.
    let sink: Arc<dyn SampleSink> = Arc::new(JsonLinesSink::connect(&config.output_path).await?);

    let mut tasks = Vec::new();
    for well in config.wells {
        info!(asset = %well.asset_name, file = %well.file_path, "starting ingestion loop");
        tasks.push(tokio::spawn(IngestLoop::new(Arc::clone(&sink), well).run()));
    }

    for task in tasks {
        task.await?;
    }

    Ok(())
}
