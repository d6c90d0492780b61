use serde::{Deserialize, Serialize};

/// How comments longer than the column budget are rendered.
///
/// One policy applies to a whole document; wrapping and truncation are
/// never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CommentPolicy {
    /// Break onto as many lines as needed, `width` characters each.
    Wrap { width: usize },
    /// Cut to `max_chars` characters, the last three being `...`.
    Truncate { max_chars: usize },
}

impl Default for CommentPolicy {
    fn default() -> Self {
        CommentPolicy::Wrap { width: 25 }
    }
}

/// Page geometry for the feedback report.
///
/// All distances are millimetres measured from the top-left corner of the
/// page; y grows downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLayout {
    pub page_width: f32,
    pub page_height: f32,

    /// Left edge of the header block and of the separator rule.
    pub margin_left: f32,
    /// Right end of the separator rule.
    pub rule_end: f32,

    pub title_y: f32,
    pub period_y: f32,
    pub total_y: f32,
    /// Baseline of the column headers on the first page.
    pub table_top: f32,
    /// Baseline of the column headers on continuation pages.
    pub top_margin: f32,
    /// Distance from a column-header baseline down to its rule.
    pub rule_offset: f32,
    /// Distance from a column-header baseline down to the first row.
    pub header_gap: f32,

    /// Vertical advance per rendered line.
    pub row_height: f32,
    /// Lowest baseline a row line may occupy.
    pub page_bottom: f32,

    pub rating_x: f32,
    pub timestamp_x: f32,
    pub comment_x: f32,

    pub title_size: f32,
    pub meta_size: f32,
    pub table_size: f32,

    pub comment_policy: CommentPolicy,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 20.0,
            rule_end: 190.0,
            title_y: 20.0,
            period_y: 30.0,
            total_y: 40.0,
            table_top: 55.0,
            top_margin: 20.0,
            rule_offset: 3.0,
            header_gap: 10.0,
            row_height: 8.0,
            page_bottom: 270.0,
            rating_x: 20.0,
            timestamp_x: 80.0,
            comment_x: 140.0,
            title_size: 16.0,
            meta_size: 12.0,
            table_size: 11.0,
            comment_policy: CommentPolicy::default(),
        }
    }
}
