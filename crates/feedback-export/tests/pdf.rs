mod common;

use std::borrow::Cow;

use common::{hours_ago, now, record, short_records};
use feedback_core::models::date_range::DateRange;
use feedback_core::models::rating::Rating;
use feedback_export::error::ExportError;
use feedback_export::pdf::{EmbeddedFont, PdfFont};
use feedback_export::report::{ReportOptions, export_pdf, generate_report_at};

const FIXTURE_FONT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/DejaVuSansMono.ttf"
);

#[test]
fn renders_every_page() {
    let doc = generate_report_at(
        &short_records(100),
        DateRange::All,
        now(),
        &ReportOptions::default(),
    );
    assert!(doc.page_count() > 1);

    let bytes = doc.to_pdf_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(bytes.len() > 1000);
}

#[test]
fn empty_document_still_renders() {
    let doc = generate_report_at(&[], DateRange::All, now(), &ReportOptions::default());
    let bytes = doc.to_pdf_bytes().unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn save_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let doc = generate_report_at(
        &short_records(3),
        DateRange::LastDay,
        now(),
        &ReportOptions::default(),
    );
    let path = dir.path().join(&doc.filename);
    doc.save(&path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF-"));
}

#[test]
fn helvetica_keeps_western_european_text() {
    let font = PdfFont::Helvetica;
    let text = "Très bien – café “rápido” 20€";
    assert!(font.covers(text));
    assert!(matches!(font.drawable(text), Cow::Borrowed(t) if t == text));
}

#[test]
fn helvetica_marks_characters_it_cannot_draw() {
    let font = PdfFont::Helvetica;
    assert!(!font.can_draw('日'));
    assert!(!font.can_draw('😀'));
    assert_eq!(font.drawable("Salamat po 日本語 ok"), "Salamat po ??? ok");
    assert_eq!(font.drawable("thanks 😀"), "thanks ?");
}

#[test]
fn non_latin_comment_survives_layout_and_renders() {
    let comment = "Salamat po 日本語 ok";
    let records = vec![record(Rating::Satisfied, Some(comment), hours_ago(1))];
    let doc = generate_report_at(&records, DateRange::LastDay, now(), &ReportOptions::default());

    let row = doc.rows().next().unwrap();
    assert_eq!(row.comment_lines, vec![comment.to_string()]);
    assert!(doc.to_pdf_bytes().unwrap().starts_with(b"%PDF-"));
}

#[test]
fn embedded_font_draws_cyrillic_comments() {
    let font = PdfFont::Embedded(EmbeddedFont::from_path(FIXTURE_FONT).unwrap());
    let comment = "Спасибо, очень быстро";
    assert!(font.covers(comment));
    assert!(!PdfFont::Helvetica.covers(comment));

    let records = vec![record(Rating::VerySatisfied, Some(comment), hours_ago(2))];
    let doc = generate_report_at(&records, DateRange::LastDay, now(), &ReportOptions::default());
    let builtin = doc.to_pdf_bytes().unwrap();
    let embedded = doc.to_pdf_bytes_with(&font).unwrap();

    assert!(embedded.starts_with(b"%PDF-"));
    assert!(embedded.len() > builtin.len() + 100_000);
}

#[test]
fn export_uses_the_configured_font() {
    let options = ReportOptions {
        font: PdfFont::Embedded(EmbeddedFont::from_path(FIXTURE_FONT).unwrap()),
        ..ReportOptions::default()
    };
    let records = vec![record(Rating::Neutral, Some("Ελήφθη"), hours_ago(3))];

    let plain = export_pdf(&records, DateRange::LastDay, now(), &ReportOptions::default()).unwrap();
    let embedded = export_pdf(&records, DateRange::LastDay, now(), &options).unwrap();
    assert_eq!(embedded.rows, 1);
    assert!(embedded.bytes.len() > plain.bytes.len() + 100_000);
}

#[test]
fn invalid_font_bytes_are_rejected() {
    let err = EmbeddedFont::from_bytes(b"not a font".to_vec()).unwrap_err();
    assert!(matches!(err, ExportError::Font(_)));

    let err = EmbeddedFont::from_path("/nonexistent/font.ttf").unwrap_err();
    assert!(matches!(err, ExportError::Io(_)));
}
