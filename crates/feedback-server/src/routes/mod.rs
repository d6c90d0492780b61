pub mod export;
pub mod feedback;
pub mod health;
pub mod stats;

use serde::Deserialize;

use feedback_core::models::date_range::DateRange;

use crate::error::ApiError;

/// `?range=` query shared by the list, stats and export endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
}

impl RangeQuery {
    /// The requested range; `All` when absent or blank.
    pub fn date_range(&self) -> Result<DateRange, ApiError> {
        match self.range.as_deref().map(str::trim) {
            None | Some("") => Ok(DateRange::All),
            Some(raw) => Ok(raw.parse()?),
        }
    }
}
