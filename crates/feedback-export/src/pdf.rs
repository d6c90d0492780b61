use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use crate::error::ExportError;
use crate::layout::{Document, Element, FontWeight, Page};

const LAYER_NAME: &str = "Report";

/// Drawn in place of a character the report font has no glyph for.
pub const REPLACEMENT_CHAR: char = '?';

/// A TrueType face embedded into the PDF for every text element.
#[derive(Clone)]
pub struct EmbeddedFont {
    bytes: Arc<[u8]>,
}

impl EmbeddedFont {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ExportError> {
        ttf_parser::Face::parse(&bytes, 0).map_err(|e| ExportError::Font(e.to_string()))?;
        Ok(Self {
            bytes: bytes.into(),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        Self::from_bytes(std::fs::read(path.as_ref())?)
    }

    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.bytes, 0).ok()
    }
}

impl fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Typeface the PDF writer draws text with.
///
/// The built-in Helvetica faces only cover the WinAnsi (Windows-1252)
/// character set. Embed a TrueType font to render other scripts.
#[derive(Debug, Clone, Default)]
pub enum PdfFont {
    #[default]
    Helvetica,
    Embedded(EmbeddedFont),
}

impl PdfFont {
    pub fn can_draw(&self, c: char) -> bool {
        self.coverage().can_draw(c)
    }

    pub fn covers(&self, text: &str) -> bool {
        self.coverage().covers(text)
    }

    /// `text` with every character this face cannot draw replaced by
    /// [`REPLACEMENT_CHAR`], so nothing is silently dropped from the page.
    pub fn drawable<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.coverage().drawable(text)
    }

    fn coverage(&self) -> Coverage<'_> {
        match self {
            PdfFont::Helvetica => Coverage::WinAnsi,
            PdfFont::Embedded(font) => match font.face() {
                Some(face) => Coverage::Face(face),
                None => Coverage::WinAnsi,
            },
        }
    }
}

enum Coverage<'a> {
    WinAnsi,
    Face(ttf_parser::Face<'a>),
}

impl Coverage<'_> {
    fn can_draw(&self, c: char) -> bool {
        match self {
            Coverage::WinAnsi => {
                let mut buf = [0u8; 4];
                !printpdf::lopdf::Document::encode_text(
                    Some("WinAnsiEncoding"),
                    c.encode_utf8(&mut buf),
                )
                .is_empty()
            }
            Coverage::Face(face) => face.glyph_index(c).is_some(),
        }
    }

    fn covers(&self, text: &str) -> bool {
        text.chars().all(|c| self.can_draw(c))
    }

    fn drawable<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.covers(text) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(
            text.chars()
                .map(|c| if self.can_draw(c) { c } else { REPLACEMENT_CHAR })
                .collect(),
        )
    }
}

enum Faces {
    Builtin {
        regular: IndirectFontRef,
        bold: IndirectFontRef,
    },
    Embedded(IndirectFontRef),
}

impl Faces {
    fn load(doc: &PdfDocumentReference, font: &PdfFont) -> Result<Self, ExportError> {
        match font {
            PdfFont::Helvetica => Ok(Faces::Builtin {
                regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
                bold: doc
                    .add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(pdf_error)?,
            }),
            PdfFont::Embedded(embedded) => Ok(Faces::Embedded(
                doc.add_external_font(&embedded.bytes[..])
                    .map_err(pdf_error)?,
            )),
        }
    }

    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match (self, weight) {
            (Faces::Builtin { regular, .. }, FontWeight::Regular) => regular,
            (Faces::Builtin { bold, .. }, FontWeight::Bold) => bold,
            (Faces::Embedded(font), _) => font,
        }
    }
}

impl Document {
    /// Serialize the document as PDF using the built-in Helvetica faces.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>, ExportError> {
        self.to_pdf_bytes_with(&PdfFont::Helvetica)
    }

    /// Serialize the document as PDF, drawing all text with `font`.
    pub fn to_pdf_bytes_with(&self, font: &PdfFont) -> Result<Vec<u8>, ExportError> {
        let width = Mm(self.page_width);
        let height = Mm(self.page_height);

        let (doc, first_page, first_layer) =
            PdfDocument::new(self.title.as_str(), width, height, LAYER_NAME);
        let faces = Faces::load(&doc, font)?;
        let coverage = font.coverage();

        if !coverage.covers(&self.title) {
            tracing::warn!(title = %self.title, "report title has characters the font cannot draw");
        }

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
                layer = doc.get_page(page_index).get_layer(layer_index);
            }
            warn_undrawable_rows(page, &coverage);
            self.draw_page(page, &layer, &faces, &coverage);
        }

        doc.save_to_bytes().map_err(pdf_error)
    }

    /// Write the PDF to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let bytes = self.to_pdf_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        tracing::info!(path = %path.as_ref().display(), "feedback report saved");
        Ok(())
    }

    fn draw_page(
        &self,
        page: &Page,
        layer: &PdfLayerReference,
        faces: &Faces,
        coverage: &Coverage<'_>,
    ) {
        for element in &page.elements {
            match element {
                Element::Text {
                    x,
                    y,
                    size,
                    weight,
                    text,
                } => {
                    layer.use_text(
                        coverage.drawable(text),
                        *size,
                        Mm(*x),
                        self.flip(*y),
                        faces.get(*weight),
                    );
                }
                Element::Rule { x1, x2, y } => {
                    let y = self.flip(*y);
                    layer.add_line(Line {
                        points: vec![(Point::new(Mm(*x1), y), false), (Point::new(Mm(*x2), y), false)],
                        is_closed: false,
                    });
                }
            }
        }
    }

    /// Layout coordinates grow downward; PDF coordinates grow upward.
    fn flip(&self, y: f32) -> Mm {
        Mm(self.page_height - y)
    }
}

fn warn_undrawable_rows(page: &Page, coverage: &Coverage<'_>) {
    for row in &page.rows {
        let covered = coverage.covers(&row.rating)
            && coverage.covers(&row.timestamp)
            && row.comment_lines.iter().all(|line| coverage.covers(line));
        if !covered {
            tracing::warn!(
                record_id = %row.record_id,
                page = page.number,
                replacement = %REPLACEMENT_CHAR,
                "feedback row has characters the report font cannot draw"
            );
        }
    }
}

fn pdf_error(e: printpdf::Error) -> ExportError {
    ExportError::Pdf(e.to_string())
}
