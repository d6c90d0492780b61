use jiff::Timestamp;

use feedback_core::models::date_range::DateRange;
use feedback_core::models::feedback::FeedbackRecord;

/// Keep the records created inside `range`, measured back from `now`.
///
/// Pure and order preserving: the result is a subsequence of `records`.
/// `DateRange::All` returns every record.
pub fn filter_by_date(
    records: &[FeedbackRecord],
    range: DateRange,
    now: Timestamp,
) -> Vec<FeedbackRecord> {
    let Some(cutoff) = range.cutoff(now) else {
        return records.to_vec();
    };

    records
        .iter()
        .filter(|record| record.created_at >= cutoff)
        .cloned()
        .collect()
}
