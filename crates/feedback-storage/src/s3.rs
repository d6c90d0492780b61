use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use feedback_core::models::feedback::{FeedbackRecord, NewFeedback};
use feedback_core::s3_keys;

use crate::error::StorageError;
use crate::store::FeedbackStore;

/// One JSON object per record under `prefix` in an S3 bucket.
///
/// `clear` deletes keys one by one; a failure part-way leaves the remaining
/// records in place and reports the error.
#[derive(Debug, Clone)]
pub struct S3FeedbackStore {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3FeedbackStore {
    pub fn new(client: Client, bucket: impl Into<String>, prefix: &str) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: s3_keys::normalize_prefix(prefix),
        }
    }

    /// Build a client from the default AWS credential chain and region.
    pub async fn from_env(bucket: impl Into<String>, prefix: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self::new(Client::new(&config), bucket, prefix)
    }

    async fn list_keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let resp = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(&self.prefix)
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

            keys.extend(
                resp.contents()
                    .iter()
                    .filter_map(|obj| obj.key())
                    .filter(|key| key.ends_with(".json"))
                    .map(str::to_string),
            );

            if resp.is_truncated() == Some(true) {
                continuation_token = resp.next_continuation_token().map(str::to_string);
            } else {
                break;
            }
        }

        Ok(keys)
    }

    async fn get_record(&self, key: &str) -> Result<FeedbackRecord, StorageError> {
        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::GetObject(format!("{key}: {}", e.into_service_error())))?;

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetObject(e.to_string()))?
            .into_bytes();

        Ok(serde_json::from_slice(&body)?)
    }

    async fn put_record(&self, record: &FeedbackRecord) -> Result<(), StorageError> {
        let key = s3_keys::feedback(&self.prefix, record.id);
        let body = serde_json::to_vec(record)?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::PutObject(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn delete_key(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for S3FeedbackStore {
    async fn list(&self) -> Result<Vec<FeedbackRecord>, StorageError> {
        let keys = self.list_keys().await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            records.push(self.get_record(key).await?);
        }

        // Keys are uuid-ordered; restore creation order.
        records.sort_by_key(|record| record.created_at);
        Ok(records)
    }

    async fn create(&self, submission: NewFeedback) -> Result<FeedbackRecord, StorageError> {
        let record = FeedbackRecord::from_submission(submission, jiff::Timestamp::now());
        self.put_record(&record).await?;
        tracing::debug!(bucket = %self.bucket, id = %record.id, "feedback stored in S3");
        Ok(record)
    }

    async fn clear(&self) -> Result<usize, StorageError> {
        let keys = self.list_keys().await?;
        for key in &keys {
            self.delete_key(key).await?;
        }
        tracing::info!(bucket = %self.bucket, prefix = %self.prefix, count = keys.len(), "feedback cleared from S3");
        Ok(keys.len())
    }
}
