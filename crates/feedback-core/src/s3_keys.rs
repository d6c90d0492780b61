//! S3 key/path conventions.
//!
//! Pure string functions. Each feedback record is stored as one JSON object
//! under a configurable prefix.

use uuid::Uuid;

pub const DEFAULT_PREFIX: &str = "feedback/";

pub fn feedback(prefix: &str, id: Uuid) -> String {
    format!("{}{id}.json", normalize_prefix(prefix))
}

/// Ensure a non-empty prefix ends with exactly one `/`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}
