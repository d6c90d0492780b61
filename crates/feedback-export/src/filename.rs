use jiff::civil::Date;

use feedback_core::models::date_range::DateRange;

pub const FILENAME_PREFIX: &str = "registrar-feedback";

/// Suggested download name, e.g. `registrar-feedback-week-2026-10-19.pdf`.
///
/// Same range and same day always give the same name; callers decide
/// whether to overwrite.
pub fn report_filename(range: DateRange, generated_on: Date) -> String {
    format!(
        "{FILENAME_PREFIX}-{}-{}.pdf",
        range.slug(),
        generated_on.strftime("%Y-%m-%d")
    )
}
