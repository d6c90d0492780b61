use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use feedback_export::report::export_pdf;

use crate::error::ApiError;
use crate::routes::RangeQuery;
use crate::state::AppState;

/// Download the PDF report for the requested range.
///
/// Responds 404 when no record falls inside the range instead of sending
/// an empty report.
pub async fn export_report(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, ApiError> {
    let range = query.date_range()?;
    let records = state.store.list().await?;
    let report = export_pdf(&records, range, jiff::Timestamp::now(), &state.report)?;

    let disposition = format!("attachment; filename=\"{}\"", report.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.bytes,
    )
        .into_response())
}
