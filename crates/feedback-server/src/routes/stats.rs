use axum::Json;
use axum::extract::{Query, State};

use feedback_core::stats::FeedbackStats;
use feedback_export::filter::filter_by_date;

use crate::error::ApiError;
use crate::routes::RangeQuery;
use crate::state::AppState;

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<FeedbackStats>, ApiError> {
    let range = query.date_range()?;
    let records = state.store.list().await?;
    let filtered = filter_by_date(&records, range, jiff::Timestamp::now());
    Ok(Json(FeedbackStats::from_records(&filtered)))
}
