//! feedback-core
//!
//! Pure domain types for the registrar feedback system: ratings, records,
//! date-range selectors, aggregate statistics, and S3 key conventions.
//! No storage or transport dependency.

pub mod error;
pub mod models;
pub mod s3_keys;
pub mod stats;
