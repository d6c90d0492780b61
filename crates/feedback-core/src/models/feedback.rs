use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::rating::Rating;

/// A single stored feedback submission.
///
/// Records are immutable once created. `comment: None` and `Some("")` are
/// kept distinct in storage; reports render both as a placeholder.
///
/// Deserialization also reads the browser-storage shape: a numeric string
/// id and `timestamp` in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeedbackRecord {
    #[serde(deserialize_with = "record_id")]
    pub id: Uuid,
    #[serde(alias = "emoji")]
    pub rating: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(
        alias = "timestamp",
        alias = "createdAt",
        deserialize_with = "created_at"
    )]
    pub created_at: jiff::Timestamp,
}

/// Stable id for a record whose stored id is not a UUID. The same legacy
/// id always maps to the same UUID.
pub fn legacy_id(raw: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, raw.as_bytes())
}

fn record_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    struct RecordId;

    impl Visitor<'_> for RecordId {
        type Value = Uuid;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a UUID or a legacy record id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Uuid, E> {
            let v = v.trim();
            if v.is_empty() {
                return Err(E::invalid_value(de::Unexpected::Str(v), &self));
            }
            Ok(Uuid::parse_str(v).unwrap_or_else(|_| legacy_id(v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uuid, E> {
            Ok(legacy_id(&v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uuid, E> {
            Ok(legacy_id(&v.to_string()))
        }
    }

    deserializer.deserialize_any(RecordId)
}

fn created_at<'de, D: Deserializer<'de>>(deserializer: D) -> Result<jiff::Timestamp, D::Error> {
    struct CreatedAt;

    impl Visitor<'_> for CreatedAt {
        type Value = jiff::Timestamp;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an RFC 3339 timestamp or epoch milliseconds")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<jiff::Timestamp, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<jiff::Timestamp, E> {
            jiff::Timestamp::from_millisecond(v).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<jiff::Timestamp, E> {
            let millis = i64::try_from(v).map_err(E::custom)?;
            self.visit_i64(millis)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<jiff::Timestamp, E> {
            if v.fract() != 0.0 || !v.is_finite() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            self.visit_i64(v as i64)
        }
    }

    deserializer.deserialize_any(CreatedAt)
}

impl FeedbackRecord {
    /// Materialize a submission into a record with a fresh id.
    pub fn from_submission(submission: NewFeedback, created_at: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            rating: submission.rating,
            comment: submission.comment,
            created_at,
        }
    }

    /// The comment if it carries any visible text.
    pub fn visible_comment(&self) -> Option<&str> {
        self.comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Payload of an end-user submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewFeedback {
    #[serde(alias = "emoji")]
    pub rating: Rating,
    #[serde(default)]
    pub comment: Option<String>,
}

impl NewFeedback {
    pub fn new(rating: Rating, comment: Option<String>) -> Self {
        Self { rating, comment }
    }
}
