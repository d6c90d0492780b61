use thiserror::Error;

use feedback_core::models::date_range::DateRange;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no feedback available to export for {}", .range.label())]
    NothingToExport { range: DateRange },

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("invalid font: {0}")]
    Font(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
