// printpdf backend and document assembly.

use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use log::info;
use lopdf::{Object, StringFormat};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, CustomPdfConformance, IndirectFontRef, Line, Mm, PdfConformance,
    PdfDocument, PdfLayerReference, Point, Polygon,
};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::form::{render_page, FormData};
use crate::style::{Anchor, Rect, Rgb, Weight, BLACK, MM_PER_PT, PAGE_HEIGHT, PAGE_WIDTH};
use crate::surface::{RectPaint, Surface};

// ============================================================================
// Surface
// ============================================================================

/// Paints onto a single printpdf layer. Converts the crate's point
/// coordinates to the millimetres printpdf works in.
pub struct PdfSurface {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn mm(points: f32) -> Mm {
    Mm(points * MM_PER_PT)
}

fn point(at: Anchor) -> Point {
    Point::new(mm(at.x), mm(at.y))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(rgb.r, rgb.g, rgb.b, None))
}

impl PdfSurface {
    pub fn new(layer: PdfLayerReference, regular: IndirectFontRef, bold: IndirectFontRef) -> Self {
        Self {
            layer,
            regular,
            bold,
        }
    }
}

impl Surface for PdfSurface {
    fn text(&mut self, text: &str, origin: Anchor, size: f32, weight: Weight) {
        let font = match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        self.layer.set_fill_color(color(BLACK));
        self.layer
            .use_text(text, size, mm(origin.x), mm(origin.y), font);
    }

    fn line(&mut self, from: Anchor, to: Anchor, thickness: f32) {
        self.layer.set_outline_color(color(BLACK));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![(point(from), false), (point(to), false)],
            is_closed: false,
        });
    }

    fn rectangle(&mut self, rect: Rect, paint: RectPaint) {
        let corners = vec![
            (point(Anchor::new(rect.x, rect.y)), false),
            (point(Anchor::new(rect.x + rect.width, rect.y)), false),
            (point(Anchor::new(rect.x + rect.width, rect.top())), false),
            (point(Anchor::new(rect.x, rect.top())), false),
        ];

        if let Some(width) = paint.border_width {
            self.layer.set_outline_color(color(BLACK));
            self.layer.set_outline_thickness(width);
        }

        match (paint.fill, paint.border_width) {
            (Some(fill), border) => {
                self.layer.set_fill_color(color(fill));
                self.layer.add_polygon(Polygon {
                    rings: vec![corners],
                    mode: if border.is_some() {
                        PaintMode::FillStroke
                    } else {
                        PaintMode::Fill
                    },
                    winding_order: WindingOrder::NonZero,
                });
            }
            (None, Some(_)) => {
                self.layer.add_line(Line {
                    points: corners,
                    is_closed: true,
                });
            }
            (None, None) => {}
        }
    }
}

// ============================================================================
// Rendered Document
// ============================================================================

/// A finished PDF. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Renders `form` to a single-page US Letter PDF.
///
/// Output is byte-for-byte reproducible: document metadata is pinned to the
/// template and the trailer `/ID` is re-stamped after printpdf writes its
/// random instance id. Fails on a malformed date anywhere in the form, or if
/// the document cannot be serialized; no partial document is ever returned.
pub fn generate(form: &FormData) -> Result<RenderedDocument, AppError> {
    let template = form.template();
    let document_id = template.document_id();

    let (doc, page, layer) = PdfDocument::new(template.title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_document_id(document_id.clone())
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::PdfError(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::PdfError(e.to_string()))?;

    {
        let mut surface = PdfSurface::new(doc.get_page(page).get_layer(layer), regular, bold);
        render_page(&mut surface, form)?;
    }

    let mut raw = Vec::new();
    {
        let mut writer = BufWriter::new(Cursor::new(&mut raw));
        doc.save(&mut writer)
            .map_err(|e| AppError::PdfError(e.to_string()))?;
        writer.flush()?;
    }

    let bytes = pin_trailer_id(&raw, &document_id)?;
    info!(
        "generated {} {} ({} bytes)",
        template.form_name,
        template.version,
        bytes.len()
    );
    Ok(RenderedDocument { bytes })
}

/// Replaces both halves of the trailer `/ID` with the template id.
fn pin_trailer_id(raw: &[u8], document_id: &str) -> Result<Vec<u8>, AppError> {
    let mut document =
        lopdf::Document::load_mem(raw).map_err(|e| AppError::PdfError(e.to_string()))?;
    let id = Object::String(document_id.as_bytes().to_vec(), StringFormat::Literal);
    document
        .trailer
        .set("ID", Object::Array(vec![id.clone(), id]));

    let mut bytes = Vec::new();
    document
        .save_to(&mut bytes)
        .map_err(|e| AppError::PdfError(e.to_string()))?;
    Ok(bytes)
}
