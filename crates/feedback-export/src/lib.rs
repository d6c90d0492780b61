//! feedback-export
//!
//! Date-range filtering, paginated table layout and PDF output for the
//! feedback report.

pub mod error;
pub mod filename;
pub mod filter;
pub mod layout;
pub mod pdf;
pub mod report;
pub mod styles;
pub mod text;
