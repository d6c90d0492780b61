use async_trait::async_trait;
use tokio::sync::Mutex;

use feedback_core::models::feedback::{FeedbackRecord, NewFeedback};

use crate::error::StorageError;
use crate::store::FeedbackStore;

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<FeedbackRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, kept in the given order.
    pub fn with_records(records: Vec<FeedbackRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn list(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        Ok(self.records.lock().await.clone())
    }

    async fn create(&self, submission: NewFeedback) -> Result<FeedbackRecord, StorageError> {
        let record = FeedbackRecord::from_submission(submission, jiff::Timestamp::now());
        self.records.lock().await.push(record.clone());
        tracing::debug!(id = %record.id, rating = %record.rating, "feedback stored in memory");
        Ok(record)
    }

    async fn clear(&self) -> Result<usize, StorageError> {
        let mut records = self.records.lock().await;
        let count = records.len();
        records.clear();
        Ok(count)
    }
}
