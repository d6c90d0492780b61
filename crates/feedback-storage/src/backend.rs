use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use feedback_core::s3_keys;

use crate::error::StorageError;
use crate::file::JsonFileStore;
use crate::memory::MemoryStore;
use crate::s3::S3FeedbackStore;
use crate::store::FeedbackStore;

/// Which backend holds the feedback records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreBackend {
    Memory,
    File {
        path: PathBuf,
    },
    S3 {
        bucket: String,
        #[serde(default = "default_prefix")]
        prefix: String,
    },
}

fn default_prefix() -> String {
    s3_keys::DEFAULT_PREFIX.to_string()
}

/// Open the configured backend behind the common store interface.
pub async fn open(backend: &StoreBackend) -> Result<Arc<dyn FeedbackStore>, StorageError> {
    let store: Arc<dyn FeedbackStore> = match backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File { path } => Arc::new(JsonFileStore::new(path.clone())),
        StoreBackend::S3 { bucket, prefix } => {
            if bucket.trim().is_empty() {
                return Err(StorageError::Config("S3 bucket name is empty".to_string()));
            }
            Arc::new(S3FeedbackStore::from_env(bucket.clone(), prefix).await)
        }
    };

    tracing::info!(backend = ?backend, "feedback store opened");
    Ok(store)
}
