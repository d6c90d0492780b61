use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use feedback_core::models::feedback::{FeedbackRecord, NewFeedback};
use feedback_core::models::rating::Rating;
use feedback_export::filter::filter_by_date;

use crate::error::ApiError;
use crate::routes::RangeQuery;
use crate::state::AppState;

pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<FeedbackRecord>>, ApiError> {
    let range = query.date_range()?;
    let records = state.store.list().await?;
    Ok(Json(filter_by_date(&records, range, jiff::Timestamp::now())))
}

/// Submission body. `emoji` is accepted for `rating` so older clients keep
/// working. The rating is validated here to return a 400 with a clear
/// message rather than a generic extractor rejection.
#[derive(Deserialize)]
pub struct CreateFeedbackRequest {
    #[serde(alias = "emoji")]
    pub rating: String,
    #[serde(default)]
    pub comment: Option<String>,
}

pub async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackRecord>), ApiError> {
    let rating: Rating = req.rating.parse()?;
    let record = state.store.create(NewFeedback::new(rating, req.comment)).await?;
    tracing::info!(id = %record.id, rating = %record.rating, "feedback submitted");
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Serialize)]
pub struct ClearResponse {
    pub deleted: usize,
}

pub async fn clear_feedback(State(state): State<AppState>) -> Result<Json<ClearResponse>, ApiError> {
    let deleted = state.store.clear().await?;
    tracing::info!(deleted, "all feedback cleared");
    Ok(Json(ClearResponse { deleted }))
}
