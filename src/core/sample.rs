use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One asset+stream+value triple submitted for publication. Built fresh per
/// published field and not retained after the publish call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub asset: String,
    pub stream: String,
    pub value: f64,
}

impl Sample {
    pub fn new(asset: impl Into<String>, stream: impl Into<String>, value: f64) -> Self {
        Self {
            asset: asset.into(),
            stream: stream.into(),
            value,
        }
    }
}

/// A transient column-name to raw-string mapping for one CSV data line,
/// discarded once its fields have been published.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    pub fn with_cells(cells: HashMap<String, String>) -> Self {
        Self { cells }
    }

    pub fn set(&mut self, column: String, value: String) {
        self.cells.insert(column, value);
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
