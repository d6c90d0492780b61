//! Paginated table layout.
//!
//! Produces a format-neutral [`Document`]: positioned text and rules per
//! page, plus the placement of every table row. The PDF writer only
//! replays the elements.

use jiff::civil::Date;
use serde::Serialize;
use uuid::Uuid;

use feedback_core::models::date_range::DateRange;

use crate::styles::ReportLayout;

pub const RATING_HEADER: &str = "Rating";
pub const TIMESTAMP_HEADER: &str = "Timestamp";
pub const COMMENT_HEADER: &str = "Comment";
pub const NO_COMMENT: &str = "(No comment)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A drawing instruction in page coordinates (mm, y downward).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        text: String,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
    },
}

/// One table row as placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedRow {
    pub record_id: Uuid,
    pub rating: String,
    pub timestamp: String,
    pub comment_lines: Vec<String>,
    /// Baseline of the row's first line.
    pub y: f32,
    /// Vertical space consumed: `row_height * comment_lines.len()`.
    pub height: f32,
    /// Set when the row alone is taller than a page and runs past the
    /// bottom margin.
    pub overflows: bool,
}

impl PlacedRow {
    /// Baseline of the row's last line.
    pub fn last_line_y(&self, row_height: f32) -> f32 {
        self.y + row_height * (self.comment_lines.len().saturating_sub(1)) as f32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub elements: Vec<Element>,
    pub rows: Vec<PlacedRow>,
}

impl Page {
    fn new(number: usize) -> Self {
        Self {
            number,
            elements: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Text of every element on the page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Rule { .. } => None,
        })
    }
}

/// The in-memory paginated report, prior to serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub generated_on: Date,
    pub range: DateRange,
    /// Number of records after filtering.
    pub total: usize,
    pub filename: String,
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn rows(&self) -> impl Iterator<Item = &PlacedRow> {
        self.pages.iter().flat_map(|page| page.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|page| page.rows.len()).sum()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Cell contents of one row before placement.
#[derive(Debug, Clone)]
pub(crate) struct RowCells {
    pub record_id: Uuid,
    pub rating: String,
    pub timestamp: String,
    pub comment_lines: Vec<String>,
}

/// Cursor-driven page filler.
pub(crate) struct PageBuilder<'a> {
    layout: &'a ReportLayout,
    pages: Vec<Page>,
    cursor: f32,
}

impl<'a> PageBuilder<'a> {
    pub fn new(layout: &'a ReportLayout) -> Self {
        Self {
            layout,
            pages: vec![Page::new(1)],
            cursor: layout.title_y,
        }
    }

    /// Header block and column headers of the first page.
    pub fn header(&mut self, title_line: &str, period: &str, total: usize) {
        let l = self.layout;
        self.text(l.margin_left, l.title_y, l.title_size, FontWeight::Regular, title_line);
        self.text(
            l.margin_left,
            l.period_y,
            l.meta_size,
            FontWeight::Regular,
            &format!("Period: {period}"),
        );
        self.text(
            l.margin_left,
            l.total_y,
            l.meta_size,
            FontWeight::Regular,
            &format!("Total Responses: {total}"),
        );
        self.column_headers(l.table_top);
    }

    /// Place a row, breaking to a new page first if its last line would
    /// fall below the page bottom. A row never straddles two pages.
    pub fn place_row(&mut self, cells: RowCells) {
        let l = self.layout;
        let lines = cells.comment_lines.len().max(1);
        let last_line_y = |top: f32| top + l.row_height * (lines - 1) as f32;
        let fresh_top = l.top_margin + l.header_gap;

        // Break only if a fresh page starts higher. A row taller than any
        // page is placed once and overflows.
        if last_line_y(self.cursor) > l.page_bottom && self.cursor > fresh_top {
            self.new_page();
        }

        let y = self.cursor;
        let overflows = last_line_y(y) > l.page_bottom;
        if overflows {
            tracing::warn!(
                record_id = %cells.record_id,
                lines,
                page = self.current().number,
                "row is taller than a page and overflows the bottom margin"
            );
        }

        self.text(l.rating_x, y, l.table_size, FontWeight::Regular, &cells.rating);
        self.text(l.timestamp_x, y, l.table_size, FontWeight::Regular, &cells.timestamp);
        for (i, line) in cells.comment_lines.iter().enumerate() {
            let line_y = y + l.row_height * i as f32;
            self.text(l.comment_x, line_y, l.table_size, FontWeight::Regular, line);
        }

        let height = l.row_height * lines as f32;
        self.cursor += height;
        self.current_mut().rows.push(PlacedRow {
            record_id: cells.record_id,
            rating: cells.rating,
            timestamp: cells.timestamp,
            comment_lines: cells.comment_lines,
            y,
            height,
            overflows,
        });
    }

    pub fn finish(self) -> Vec<Page> {
        self.pages
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page::new(number));
        self.column_headers(self.layout.top_margin);
    }

    fn column_headers(&mut self, y: f32) {
        let l = self.layout;
        self.text(l.rating_x, y, l.table_size, FontWeight::Bold, RATING_HEADER);
        self.text(l.timestamp_x, y, l.table_size, FontWeight::Bold, TIMESTAMP_HEADER);
        self.text(l.comment_x, y, l.table_size, FontWeight::Bold, COMMENT_HEADER);
        self.current_mut().elements.push(Element::Rule {
            x1: l.margin_left,
            x2: l.rule_end,
            y: y + l.rule_offset,
        });
        self.cursor = y + l.header_gap;
    }

    fn text(&mut self, x: f32, y: f32, size: f32, weight: FontWeight, text: &str) {
        self.current_mut().elements.push(Element::Text {
            x,
            y,
            size,
            weight,
            text: text.to_string(),
        });
    }

    fn current(&self) -> &Page {
        // `pages` starts with one page and only grows.
        &self.pages[self.pages.len() - 1]
    }

    fn current_mut(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}
