use feedback_core::models::feedback::NewFeedback;
use feedback_core::models::rating::Rating;
use feedback_storage::error::StorageError;
use feedback_storage::file::JsonFileStore;
use feedback_storage::{FeedbackStore, StoreBackend, open};

#[tokio::test]
async fn missing_file_is_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("feedback.json"));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn records_survive_reopen_in_creation_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("feedback.json");

    let store = JsonFileStore::new(&path);
    let a = store
        .create(NewFeedback::new(Rating::VerySatisfied, Some("Great service".to_string())))
        .await
        .unwrap();
    let b = store
        .create(NewFeedback::new(Rating::Neutral, Some(String::new())))
        .await
        .unwrap();
    let c = store
        .create(NewFeedback::new(Rating::Neutral, None))
        .await
        .unwrap();
    drop(store);

    let reopened = JsonFileStore::new(&path);
    let listed = reopened.list().await.unwrap();
    assert_eq!(listed, vec![a, b, c]);
    // empty string and absent comment are preserved distinctly
    assert_eq!(listed[1].comment.as_deref(), Some(""));
    assert_eq!(listed[2].comment, None);
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn clear_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feedback.json");
    let store = JsonFileStore::new(&path);
    store
        .create(NewFeedback::new(Rating::Satisfied, None))
        .await
        .unwrap();
    assert!(path.exists());

    assert_eq!(store.clear().await.unwrap(), 1);
    assert!(!path.exists());
    assert_eq!(store.clear().await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_rating_on_disk_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feedback.json");
    std::fs::write(
        &path,
        r#"[{"id":"6f1c2c8e-8a8e-4f0e-9a57-3c3a3c0f1a11","rating":"thrilled","created_at":"2026-10-19T12:00:00Z"}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.list().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
    assert!(err.to_string().contains("invalid rating: thrilled"));

    // the store can still be reset
    assert_eq!(store.clear().await.unwrap(), 0);
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_creates_are_all_kept() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(JsonFileStore::new(dir.path().join("feedback.json")));

    let mut handles = Vec::new();
    for i in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create(NewFeedback::new(Rating::Satisfied, Some(format!("#{i}"))))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list().await.unwrap().len(), 10);
}

#[tokio::test]
async fn open_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let backend = StoreBackend::File {
        path: dir.path().join("feedback.json"),
    };
    let store = open(&backend).await.unwrap();
    store
        .create(NewFeedback::new(Rating::Dissatisfied, None))
        .await
        .unwrap();
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn open_rejects_empty_bucket() {
    let backend = StoreBackend::S3 {
        bucket: "  ".to_string(),
        prefix: "feedback/".to_string(),
    };
    assert!(matches!(open(&backend).await, Err(StorageError::Config(_))));
}

#[test]
fn backend_config_deserializes_with_default_prefix() {
    let backend: StoreBackend =
        serde_json::from_str(r#"{"type":"s3","bucket":"registrar-feedback"}"#).unwrap();
    assert_eq!(
        backend,
        StoreBackend::S3 {
            bucket: "registrar-feedback".to_string(),
            prefix: "feedback/".to_string(),
        }
    );
}

#[tokio::test]
async fn reads_records_exported_from_browser_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feedback.json");
    std::fs::write(
        &path,
        r#"[{"id":"1729339200000","rating":"dissatisfied","comment":"Long queue","timestamp":1729339200000}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].rating, Rating::Dissatisfied);
    assert_eq!(
        listed[0].created_at,
        "2024-10-19T12:00:00Z".parse::<jiff::Timestamp>().unwrap()
    );

    // appending rewrites the legacy record in the current shape
    store
        .create(NewFeedback::new(Rating::Satisfied, None))
        .await
        .unwrap();
    let reopened = JsonFileStore::new(&path).list().await.unwrap();
    assert_eq!(reopened[0], listed[0]);
    assert_eq!(reopened.len(), 2);
}
