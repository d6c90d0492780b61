use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use feedback_core::models::feedback::{FeedbackRecord, NewFeedback};

use crate::error::StorageError;
use crate::store::FeedbackStore;

/// All records in a single JSON array on local disk.
///
/// A missing file is an empty store. Writes go to a temp file that is then
/// renamed over the original, so readers never observe a partial array.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_all(&self, records: &[FeedbackRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(records)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        self.read_all().await
    }

    async fn create(&self, submission: NewFeedback) -> Result<FeedbackRecord, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_all().await?;
        let record = FeedbackRecord::from_submission(submission, jiff::Timestamp::now());
        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::debug!(
            path = %self.path.display(),
            id = %record.id,
            total = records.len(),
            "feedback appended to file"
        );
        Ok(record)
    }

    async fn clear(&self) -> Result<usize, StorageError> {
        let _guard = self.write_lock.lock().await;

        // An unreadable file is still cleared; the count is then unknown.
        let count = match self.read_all().await {
            Ok(records) => records.len(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "clearing unreadable feedback file"
                );
                0
            }
        };

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        tracing::info!(path = %self.path.display(), count, "feedback file cleared");
        Ok(count)
    }
}
