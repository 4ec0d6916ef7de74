pub mod config;
pub mod core;
pub mod ingest;
pub mod sink;
pub mod source;

pub use crate::config::{Config, WellSource};
pub use crate::core::*;
pub use crate::ingest::IngestLoop;
