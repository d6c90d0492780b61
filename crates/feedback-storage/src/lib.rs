//! feedback-storage
//!
//! The feedback store interface and its backends: in-memory, a local JSON
//! file, and S3.

pub mod backend;
pub mod error;
pub mod file;
pub mod memory;
pub mod s3;
pub mod store;

pub use backend::{StoreBackend, open};
pub use store::FeedbackStore;
