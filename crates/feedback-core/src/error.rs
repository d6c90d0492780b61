use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid rating: {0}")]
    InvalidRating(String),

    #[error("invalid date range: {0}")]
    InvalidDateRange(String),
}
