#![allow(dead_code)]

use feedback_core::models::feedback::FeedbackRecord;
use feedback_core::models::rating::Rating;
use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

pub fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

pub fn now() -> Timestamp {
    ts("2026-10-19T12:00:00Z")
}

pub fn record(rating: Rating, comment: Option<&str>, created_at: Timestamp) -> FeedbackRecord {
    FeedbackRecord {
        id: Uuid::new_v4(),
        rating,
        comment: comment.map(str::to_string),
        created_at,
    }
}

pub fn hours_ago(hours: i64) -> Timestamp {
    now() - SignedDuration::from_hours(hours)
}

/// `n` single-line records, one minute apart, all within the last day.
pub fn short_records(n: usize) -> Vec<FeedbackRecord> {
    (0..n)
        .map(|i| {
            record(
                Rating::ALL[i % Rating::ALL.len()],
                Some("ok"),
                now() - SignedDuration::from_mins(n as i64 - i as i64),
            )
        })
        .collect()
}
