// The page being painted. Write-only: renderers issue marks, nothing is read back.

use crate::style::{Anchor, Rect, Rgb, Weight};

/// How a rectangle is painted. At least one of the two is expected to be set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPaint {
    /// Stroke width of the black border, if bordered
    pub border_width: Option<f32>,
    pub fill: Option<Rgb>,
}

/// Mark-making backend for one page.
///
/// Implemented by the printpdf layer for real output and by
/// [`RecordingSurface`] for tests.
pub trait Surface {
    /// Black text run with its baseline starting at `origin`; `size` in points.
    fn text(&mut self, text: &str, origin: Anchor, size: f32, weight: Weight);

    /// Black straight line.
    fn line(&mut self, from: Anchor, to: Anchor, thickness: f32);

    fn rectangle(&mut self, rect: Rect, paint: RectPaint);
}

/// One recorded mark, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
    },
    Line {
        from: Anchor,
        to: Anchor,
        thickness: f32,
    },
    Rect {
        rect: Rect,
        paint: RectPaint,
    },
}

/// Surface that keeps every mark it is given. Used to assert on what a
/// renderer drew without parsing PDF content streams.
///
/// Part of the public API so that downstream crates and this crate's
/// integration tests can paint a form with [`render_page`](crate::render_page)
/// and inspect the result. The query helpers compare coordinates with a small
/// tolerance.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

const EPSILON: f32 = 1e-3;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// All text runs, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|text| *text == needle)
    }

    /// Text drawn with its baseline starting exactly at `(x, y)`.
    pub fn text_at(&self, x: f32, y: f32) -> Option<&str> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { text, x: tx, y: ty, .. } if close(*tx, x) && close(*ty, y) => {
                Some(text.as_str())
            }
            _ => None,
        })
    }

    /// Index of the first op drawing `needle`.
    pub fn position_of_text(&self, needle: &str) -> Option<usize> {
        self.ops
            .iter()
            .position(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }

    /// Index of the first rectangle with its corner at `(x, y)`.
    pub fn position_of_rect(&self, x: f32, y: f32) -> Option<usize> {
        self.ops.iter().position(|op| {
            matches!(op, DrawOp::Rect { rect, .. } if close(rect.x, x) && close(rect.y, y))
        })
    }

    /// Horizontal line starting at `(x, y)` with the given length.
    pub fn has_underline(&self, x: f32, y: f32, width: f32) -> bool {
        self.ops.iter().any(|op| match op {
            DrawOp::Line { from, to, .. } => {
                close(from.x, x) && close(from.y, y) && close(to.x, x + width) && close(to.y, y)
            }
            _ => false,
        })
    }

    /// Checkbox outline with its corner at `(x, y)`.
    pub fn has_checkbox(&self, x: f32, y: f32) -> bool {
        self.ops.iter().any(|op| match op {
            DrawOp::Rect { rect, paint } => {
                close(rect.x, x) && close(rect.y, y) && paint.fill.is_none() && close(rect.width, rect.height)
            }
            _ => false,
        })
    }

    /// Whether the checkbox at `(x, y)` carries an X mark. Detected by the
    /// rising diagonal, which always starts just inside the corner.
    pub fn is_checked(&self, x: f32, y: f32) -> bool {
        let inset = crate::style::CHECK_MARK_INSET;
        self.ops.iter().any(|op| match op {
            DrawOp::Line { from, to, .. } => {
                close(from.x, x + inset) && close(from.y, y + inset) && to.x > from.x && to.y > from.y
            }
            _ => false,
        })
    }

    /// Number of X marks on the page.
    pub fn checked_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { from, to, .. } if to.x > from.x && to.y > from.y))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn text(&mut self, text: &str, origin: Anchor, size: f32, weight: Weight) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x: origin.x,
            y: origin.y,
            size,
            weight,
        });
    }

    fn line(&mut self, from: Anchor, to: Anchor, thickness: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            thickness,
        });
    }

    fn rectangle(&mut self, rect: Rect, paint: RectPaint) {
        self.ops.push(DrawOp::Rect { rect, paint });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_issue_order() {
        let mut surface = RecordingSurface::new();
        surface.rectangle(
            Rect::new(10.0, 10.0, 5.0, 5.0),
            RectPaint {
                border_width: Some(0.6),
                fill: None,
            },
        );
        surface.text("Sex:", Anchor::new(20.0, 12.0), 7.5, Weight::Regular);
        surface.line(Anchor::new(0.0, 0.0), Anchor::new(50.0, 0.0), 0.6);

        assert_eq!(surface.ops().len(), 3);
        assert_eq!(surface.texts(), vec!["Sex:"]);
        assert_eq!(surface.position_of_rect(10.0, 10.0), Some(0));
        assert_eq!(surface.position_of_text("Sex:"), Some(1));
        assert_eq!(surface.text_at(20.0, 12.0), Some("Sex:"));
        assert!(surface.has_underline(0.0, 0.0, 50.0));
        assert!(surface.has_checkbox(10.0, 10.0));
        assert_eq!(surface.checked_count(), 0);
    }
}
