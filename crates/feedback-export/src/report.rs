use jiff::Timestamp;
use jiff::tz::TimeZone;

use feedback_core::models::date_range::DateRange;
use feedback_core::models::feedback::FeedbackRecord;

use crate::error::ExportError;
use crate::filename::report_filename;
use crate::filter::filter_by_date;
use crate::layout::{Document, NO_COMMENT, PageBuilder, RowCells};
use crate::pdf::PdfFont;
use crate::styles::{CommentPolicy, ReportLayout};
use crate::text::{truncate_chars, wrap_text};

pub const DEFAULT_TITLE: &str = "Registrar's Office Feedback Report";

/// Everything that shapes a report besides the records and the range.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    /// Zone used for the generation date and for row timestamps.
    pub time_zone: TimeZone,
    pub layout: ReportLayout,
    pub font: PdfFont,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            time_zone: TimeZone::UTC,
            layout: ReportLayout::default(),
            font: PdfFont::default(),
        }
    }
}

/// A serialized report ready to hand to a user.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub filename: String,
    pub rows: usize,
    pub pages: usize,
    pub bytes: Vec<u8>,
}

/// Generate a report for `range` as of the current wall-clock time.
pub fn generate_report(
    records: &[FeedbackRecord],
    range: DateRange,
    options: &ReportOptions,
) -> Document {
    generate_report_at(records, range, Timestamp::now(), options)
}

/// Generate a report for `range` as of `now`.
///
/// Deterministic: the same records, range, `now` and options always give
/// an identical document. An empty filtered set still yields a header with
/// a zero total and an empty table.
pub fn generate_report_at(
    records: &[FeedbackRecord],
    range: DateRange,
    now: Timestamp,
    options: &ReportOptions,
) -> Document {
    let filtered = filter_by_date(records, range, now);
    let generated_on = now.to_zoned(options.time_zone.clone()).date();
    let layout = &options.layout;

    let title_line = format!(
        "{} - {}",
        options.title,
        generated_on.strftime("%B %-d, %Y")
    );

    let mut builder = PageBuilder::new(layout);
    builder.header(&title_line, range.label(), filtered.len());
    for record in &filtered {
        builder.place_row(row_cells(record, options));
    }
    let pages = builder.finish();

    tracing::debug!(
        range = %range,
        input = records.len(),
        rows = filtered.len(),
        pages = pages.len(),
        "feedback report laid out"
    );

    Document {
        title: options.title.clone(),
        generated_on,
        range,
        total: filtered.len(),
        filename: report_filename(range, generated_on),
        page_width: layout.page_width,
        page_height: layout.page_height,
        pages,
    }
}

/// Filter, lay out and serialize in one step.
///
/// Refuses an empty filtered set with [`ExportError::NothingToExport`] so
/// callers can show a notice instead of handing out an empty file.
pub fn export_pdf(
    records: &[FeedbackRecord],
    range: DateRange,
    now: Timestamp,
    options: &ReportOptions,
) -> Result<ExportedReport, ExportError> {
    if !records.iter().any(|r| range.contains(r.created_at, now)) {
        return Err(ExportError::NothingToExport { range });
    }

    let document = generate_report_at(records, range, now, options);
    let bytes = document.to_pdf_bytes_with(&options.font)?;

    tracing::info!(
        filename = %document.filename,
        rows = document.row_count(),
        pages = document.page_count(),
        size = bytes.len(),
        "feedback report exported"
    );

    Ok(ExportedReport {
        rows: document.row_count(),
        pages: document.page_count(),
        filename: document.filename,
        bytes,
    })
}

fn row_cells(record: &FeedbackRecord, options: &ReportOptions) -> RowCells {
    let timestamp = record
        .created_at
        .to_zoned(options.time_zone.clone())
        .strftime("%m/%d/%Y %H:%M")
        .to_string();

    let comment = record.visible_comment().unwrap_or(NO_COMMENT);
    let comment_lines = match options.layout.comment_policy {
        CommentPolicy::Wrap { width } => wrap_text(comment, width),
        CommentPolicy::Truncate { max_chars } => vec![truncate_chars(comment, max_chars)],
    };

    RowCells {
        record_id: record.id,
        rating: record.rating.label().to_string(),
        timestamp,
        comment_lines,
    }
}
