mod common;

use common::{hours_ago, now, record, short_records, ts};
use feedback_core::models::date_range::DateRange;
use feedback_core::models::rating::Rating;
use feedback_export::error::ExportError;
use feedback_export::filename::report_filename;
use feedback_export::layout::NO_COMMENT;
use feedback_export::report::{ReportOptions, export_pdf, generate_report, generate_report_at};
use jiff::tz::{self, TimeZone};

#[test]
fn three_record_scenario() {
    let records = vec![
        record(Rating::VerySatisfied, Some("Great service"), hours_ago(3)),
        record(Rating::Neutral, None, hours_ago(2)),
        record(
            Rating::VeryDissatisfied,
            Some("Waited 45 minutes, very frustrating experience overall"),
            hours_ago(1),
        ),
    ];

    let doc = generate_report_at(&records, DateRange::LastWeek, now(), &ReportOptions::default());

    assert_eq!(doc.total, 3);
    assert_eq!(doc.row_count(), 3);
    let header: Vec<_> = doc.pages[0].texts().take(3).collect();
    assert_eq!(
        header,
        [
            "Registrar's Office Feedback Report - October 19, 2026",
            "Period: Last Week",
            "Total Responses: 3",
        ]
    );

    let rows: Vec<_> = doc.rows().collect();
    assert_eq!(rows[0].rating, "Very Satisfied");
    assert_eq!(rows[0].comment_lines, vec!["Great service"]);
    assert_eq!(rows[1].rating, "Neutral");
    assert_eq!(rows[1].comment_lines, vec![NO_COMMENT]);
    assert_eq!(rows[2].rating, "Very Dissatisfied");
    assert!(rows[2].comment_lines.len() > 1);
    assert_eq!(rows[2].timestamp, "10/19/2026 11:00");

    assert_eq!(doc.filename, "registrar-feedback-week-2026-10-19.pdf");
}

#[test]
fn range_filter_applies_to_header_and_rows() {
    let records = vec![
        record(Rating::Satisfied, Some("old"), hours_ago(24 * 40)),
        record(Rating::Satisfied, Some("recent"), hours_ago(5)),
    ];
    let doc = generate_report_at(&records, DateRange::LastMonth, now(), &ReportOptions::default());
    assert_eq!(doc.total, 1);
    assert_eq!(doc.rows().next().unwrap().comment_lines, vec!["recent"]);
    assert!(doc.pages[0].texts().any(|t| t == "Period: Last Month"));
}

#[test]
fn repeated_generation_is_identical() {
    let records = short_records(70);
    let options = ReportOptions::default();
    let a = generate_report_at(&records, DateRange::LastDay, now(), &options);
    let b = generate_report_at(&records, DateRange::LastDay, now(), &options);
    assert_eq!(a, b);
    assert_eq!(a.filename, b.filename);
}

#[test]
fn empty_and_blank_comments_render_placeholder() {
    let records = vec![
        record(Rating::Neutral, None, hours_ago(1)),
        record(Rating::Neutral, Some(""), hours_ago(1)),
        record(Rating::Neutral, Some("   "), hours_ago(1)),
    ];
    assert_ne!(records[0].comment, records[1].comment);

    let doc = generate_report_at(&records, DateRange::All, now(), &ReportOptions::default());
    for row in doc.rows() {
        assert_eq!(row.comment_lines, vec![NO_COMMENT]);
    }
}

#[test]
fn timestamps_and_dates_follow_the_configured_zone() {
    let options = ReportOptions {
        time_zone: TimeZone::fixed(tz::offset(14)),
        ..ReportOptions::default()
    };
    let records = vec![record(Rating::Satisfied, None, ts("2026-10-19T08:05:00Z"))];
    let doc = generate_report_at(&records, DateRange::All, now(), &options);

    assert_eq!(doc.rows().next().unwrap().timestamp, "10/19/2026 22:05");
    // 12:00 UTC is already the next day at +14
    assert_eq!(doc.generated_on, jiff::civil::date(2026, 10, 20));
    assert_eq!(doc.filename, "registrar-feedback-all-2026-10-20.pdf");
}

#[test]
fn filename_is_stable_per_range_and_day() {
    let day = jiff::civil::date(2026, 1, 5);
    assert_eq!(
        report_filename(DateRange::All, day),
        "registrar-feedback-all-2026-01-05.pdf"
    );
    assert_eq!(
        report_filename(DateRange::LastYear, day),
        "registrar-feedback-year-2026-01-05.pdf"
    );
}

#[test]
fn wall_clock_generation_includes_fresh_records() {
    let records = vec![record(Rating::Satisfied, None, jiff::Timestamp::now())];
    let doc = generate_report(&records, DateRange::LastDay, &ReportOptions::default());
    assert_eq!(doc.total, 1);
}

#[test]
fn export_refuses_empty_selection() {
    let records = vec![record(Rating::Satisfied, None, hours_ago(24 * 10))];
    let err = export_pdf(&records, DateRange::LastWeek, now(), &ReportOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ExportError::NothingToExport {
            range: DateRange::LastWeek
        }
    ));
    assert_eq!(
        err.to_string(),
        "no feedback available to export for Last Week"
    );

    let err = export_pdf(&[], DateRange::All, now(), &ReportOptions::default()).unwrap_err();
    assert!(matches!(err, ExportError::NothingToExport { .. }));
}

#[test]
fn export_produces_pdf_bytes() {
    let records = short_records(40);
    let exported =
        export_pdf(&records, DateRange::All, now(), &ReportOptions::default()).unwrap();
    assert_eq!(exported.rows, 40);
    assert_eq!(exported.pages, 2);
    assert_eq!(exported.filename, "registrar-feedback-all-2026-10-19.pdf");
    assert!(exported.bytes.starts_with(b"%PDF-"));
}
