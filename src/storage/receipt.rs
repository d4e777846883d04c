use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("Failed to write receipt: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable sink for rendered receipts; returns a reference to where the
/// receipt was written.
pub trait ReceiptSink: Send + Sync {
    fn write(&self, placed_at: DateTime<Utc>, contents: &str) -> Result<PathBuf, ReceiptError>;
}

/// Writes each receipt to its own timestamped file under the receipts
/// directory, so repeated checkouts never overwrite each other.
pub struct FileReceiptWriter {
    dir: PathBuf,
}

impl FileReceiptWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReceiptSink for FileReceiptWriter {
    fn write(&self, placed_at: DateTime<Utc>, contents: &str) -> Result<PathBuf, ReceiptError> {
        fs::create_dir_all(&self.dir)?;

        let stamp = placed_at.format("%Y%m%d_%H%M%S");
        let mut path = self.dir.join(format!("receipt_{stamp}.txt"));
        let mut attempt = 1;

        // Checkouts within the same second get a numeric suffix instead of
        // clobbering the earlier receipt.
        loop {
            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
            {
                Ok(mut file) => {
                    file.write_all(contents.as_bytes())?;
                    info!("Receipt written to {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                    path = self.dir.join(format!("receipt_{stamp}_{attempt}.txt"));
                }
                Err(e) => return Err(ReceiptError::Io(e)),
            }
        }
    }
}
