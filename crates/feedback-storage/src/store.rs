use async_trait::async_trait;

use feedback_core::models::feedback::{FeedbackRecord, NewFeedback};

use crate::error::StorageError;

/// Persistent collection of feedback records.
///
/// Every backend exposes the same asynchronous contract, so callers never
/// branch on where records live. Records are returned in creation order.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// All stored records, oldest first.
    async fn list(&self) -> Result<Vec<FeedbackRecord>, StorageError>;

    /// Persist a submission. The store assigns the id and creation time.
    async fn create(&self, submission: NewFeedback) -> Result<FeedbackRecord, StorageError>;

    /// Remove every record. Returns how many were removed.
    async fn clear(&self) -> Result<usize, StorageError>;
}
