use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::order::OrderRecord;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to append order history: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to encode order record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Append-only log of completed checkouts, one record per checkout.
pub trait OrderHistory: Send + Sync {
    fn append(&self, record: &OrderRecord) -> Result<(), HistoryError>;
}

/// JSON-lines implementation; the file is created on first append.
pub struct FileOrderHistory {
    path: PathBuf,
}

impl FileOrderHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderHistory for FileOrderHistory {
    fn append(&self, record: &OrderRecord) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let line = serde_json::to_string(record)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        debug!("Order appended to history at {}", self.path.display());
        Ok(())
    }
}
