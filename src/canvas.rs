// Primitive drawing operations. Section renderers only ever talk to a Canvas.

use log::warn;

use crate::date::format_date;
use crate::encoding::check_win_ansi;
use crate::error::AppError;
use crate::metrics::text_width;
use crate::style::{
    Anchor, FontSize, Rect, Rgb, Rule, Weight, CHECKBOX_SIZE, CHECK_MARK_INSET, CHECK_MARK_WIDTH,
    PAGE_WIDTH, UNDERLINE_WIDTH, VALUE_INSET, VALUE_LIFT,
};
use crate::surface::{RectPaint, Surface};

/// Returns the trimmed value when it holds anything worth printing.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Rendering context for one page. Borrowed mutably by each section in turn.
pub struct Canvas<'s> {
    surface: &'s mut dyn Surface,
}

impl<'s> Canvas<'s> {
    pub fn new(surface: &'s mut dyn Surface) -> Self {
        Self { surface }
    }

    /// Text with its baseline at `(x, y)`. No wrapping: long values run over
    /// whatever sits to their right.
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: FontSize, weight: Weight) {
        self.surface
            .text(text, Anchor::new(x, y), size.points(), weight);
    }

    pub fn label(&mut self, text: &str, at: Anchor, size: FontSize) {
        self.text(text, at.x, at.y, size, Weight::Regular);
    }

    pub fn bold_label(&mut self, text: &str, at: Anchor, size: FontSize) {
        self.text(text, at.x, at.y, size, Weight::Bold);
    }

    /// Text centered on the full page width.
    pub fn centered_text(&mut self, text: &str, y: f32, size: FontSize, weight: Weight) {
        let width = text_width(text, size.points(), weight);
        let x = (PAGE_WIDTH - width) / 2.0;
        self.text(text, x, y, size, weight);
    }

    /// Text centered inside `[left, left + width]`.
    pub fn text_centered_in(
        &mut self,
        text: &str,
        left: f32,
        width: f32,
        y: f32,
        size: FontSize,
        weight: Weight,
    ) {
        let text_w = text_width(text, size.points(), weight);
        self.text(text, left + (width - text_w) / 2.0, y, size, weight);
    }

    pub fn underline(&mut self, x: f32, y: f32, width: f32) {
        self.surface.line(
            Anchor::new(x, y),
            Anchor::new(x + width, y),
            UNDERLINE_WIDTH,
        );
    }

    pub fn rule(&mut self, rule: Rule) {
        self.underline(rule.x, rule.y, rule.width);
    }

    /// Tiny caption centered under (or over) a rule.
    pub fn caption(&mut self, text: &str, rule: Rule, y: f32) {
        self.text_centered_in(text, rule.x, rule.width, y, FontSize::TinyText, Weight::Regular);
    }

    pub fn checkbox(&mut self, x: f32, y: f32) {
        self.checkbox_sized(x, y, CHECKBOX_SIZE);
    }

    pub fn checkbox_sized(&mut self, x: f32, y: f32, size: f32) {
        self.surface.rectangle(
            Rect::new(x, y, size, size),
            RectPaint {
                border_width: Some(UNDERLINE_WIDTH),
                fill: None,
            },
        );
    }

    /// Outline plus an X mark.
    pub fn filled_checkbox(&mut self, x: f32, y: f32) {
        self.filled_checkbox_sized(x, y, CHECKBOX_SIZE);
    }

    pub fn filled_checkbox_sized(&mut self, x: f32, y: f32, size: f32) {
        self.checkbox_sized(x, y, size);
        let near = CHECK_MARK_INSET;
        let far = size - CHECK_MARK_INSET;
        self.surface.line(
            Anchor::new(x + near, y + near),
            Anchor::new(x + far, y + far),
            CHECK_MARK_WIDTH,
        );
        self.surface.line(
            Anchor::new(x + far, y + near),
            Anchor::new(x + near, y + far),
            CHECK_MARK_WIDTH,
        );
    }

    /// One option of a selection group: filled when `checked`, plain otherwise.
    pub fn option(&mut self, at: Anchor, checked: bool) {
        if checked {
            self.filled_checkbox(at.x, at.y);
        } else {
            self.checkbox(at.x, at.y);
        }
    }

    pub fn bordered_rect(&mut self, rect: Rect, border_width: f32, fill: Option<Rgb>) {
        self.surface.rectangle(
            rect,
            RectPaint {
                border_width: Some(border_width),
                fill,
            },
        );
    }

    /// Borderless filled rectangle, e.g. a banner behind a title.
    pub fn filled_rect(&mut self, rect: Rect, fill: Rgb) {
        self.surface.rectangle(
            rect,
            RectPaint {
                border_width: None,
                fill: Some(fill),
            },
        );
    }

    /// Field value in field-text size, skipped when absent or blank. A value
    /// the form font cannot print fails the whole render.
    pub fn value(&mut self, value: &Option<String>, at: Anchor) -> Result<(), AppError> {
        if let Some(value) = present(value) {
            self.field_text(value, at)?;
        }
        Ok(())
    }

    /// Multi-line value, one line per anchor in order. Blank lines are
    /// skipped; lines beyond the last anchor are dropped.
    pub fn value_lines(&mut self, value: &Option<String>, lines: &[Anchor]) -> Result<(), AppError> {
        let Some(value) = present(value) else {
            return Ok(());
        };
        let text: Vec<&str> = value
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if text.len() > lines.len() {
            warn!(
                "{} lines of text but the form has {} rules, dropping {}",
                text.len(),
                lines.len(),
                text.len() - lines.len()
            );
        }
        for (line, at) in text.iter().zip(lines) {
            self.field_text(line, *at)?;
        }
        Ok(())
    }

    fn field_text(&mut self, value: &str, at: Anchor) -> Result<(), AppError> {
        check_win_ansi(value)?;
        self.text(value, at.x, at.y, FontSize::FieldText, Weight::Regular);
        Ok(())
    }

    /// Date value printed as `MM/DD/YYYY`. Blank draws nothing; a malformed
    /// date fails the whole render.
    pub fn date_value(&mut self, value: &Option<String>, at: Anchor) -> Result<(), AppError> {
        if let Some(formatted) = format_date(value.as_deref())? {
            self.text(&formatted, at.x, at.y, FontSize::FieldText, Weight::Regular);
        }
        Ok(())
    }

    pub fn value_on(&mut self, value: &Option<String>, rule: Rule) -> Result<(), AppError> {
        self.value(value, on_rule(rule))
    }

    pub fn date_value_on(&mut self, value: &Option<String>, rule: Rule) -> Result<(), AppError> {
        self.date_value(value, on_rule(rule))
    }
}

/// Where a value written onto `rule` starts.
pub fn on_rule(rule: Rule) -> Anchor {
    Anchor::new(rule.x + VALUE_INSET, rule.y + VALUE_LIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};
    use pretty_assertions::assert_eq;

    #[test]
    fn filled_checkbox_is_outline_and_two_diagonals() {
        let mut surface = RecordingSurface::new();
        Canvas::new(&mut surface).filled_checkbox(100.0, 200.0);

        let near = CHECK_MARK_INSET;
        let far = CHECKBOX_SIZE - CHECK_MARK_INSET;
        assert_eq!(
            surface.ops(),
            &[
                DrawOp::Rect {
                    rect: Rect::new(100.0, 200.0, CHECKBOX_SIZE, CHECKBOX_SIZE),
                    paint: RectPaint {
                        border_width: Some(UNDERLINE_WIDTH),
                        fill: None,
                    },
                },
                DrawOp::Line {
                    from: Anchor::new(100.0 + near, 200.0 + near),
                    to: Anchor::new(100.0 + far, 200.0 + far),
                    thickness: CHECK_MARK_WIDTH,
                },
                DrawOp::Line {
                    from: Anchor::new(100.0 + far, 200.0 + near),
                    to: Anchor::new(100.0 + near, 200.0 + far),
                    thickness: CHECK_MARK_WIDTH,
                },
            ]
        );
        assert!(surface.is_checked(100.0, 200.0));
        assert_eq!(surface.checked_count(), 1);
    }

    #[test]
    fn option_marks_only_when_checked() {
        let mut surface = RecordingSurface::new();
        {
            let mut canvas = Canvas::new(&mut surface);
            canvas.option(Anchor::new(10.0, 10.0), false);
            canvas.option(Anchor::new(30.0, 10.0), true);
        }
        assert!(surface.has_checkbox(10.0, 10.0));
        assert!(!surface.is_checked(10.0, 10.0));
        assert!(surface.is_checked(30.0, 10.0));
    }

    #[test]
    fn centered_text_is_symmetric_on_page() {
        let mut surface = RecordingSurface::new();
        Canvas::new(&mut surface).centered_text("V.", 485.0, FontSize::SectionHeader, Weight::Bold);

        let width = text_width("V.", FontSize::SectionHeader.points(), Weight::Bold);
        match &surface.ops()[0] {
            DrawOp::Text { x, y, .. } => {
                assert!((x + width / 2.0 - PAGE_WIDTH / 2.0).abs() < 1e-3);
                assert_eq!(*y, 485.0);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn blank_values_draw_nothing() {
        let mut surface = RecordingSurface::new();
        {
            let mut canvas = Canvas::new(&mut surface);
            canvas.value(&None, Anchor::new(1.0, 1.0)).unwrap();
            canvas.value(&Some("   ".to_string()), Anchor::new(1.0, 1.0)).unwrap();
            canvas.date_value(&Some(String::new()), Anchor::new(1.0, 1.0)).unwrap();
        }
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn values_are_trimmed() {
        let mut surface = RecordingSurface::new();
        Canvas::new(&mut surface)
            .value(&Some("  Caddo  ".to_string()), Anchor::new(5.0, 6.0))
            .unwrap();
        assert_eq!(surface.text_at(5.0, 6.0), Some("Caddo"));
    }

    #[test]
    fn values_sit_on_their_rule() {
        let rule = Rule::new(100.0, 497.0, 80.0);
        let mut surface = RecordingSurface::new();
        {
            let mut canvas = Canvas::new(&mut surface);
            canvas.rule(rule);
            canvas.value_on(&Some("LA".to_string()), rule).unwrap();
            canvas.caption("State", rule, 490.0);
        }
        assert!(surface.has_underline(100.0, 497.0, 80.0));
        assert_eq!(surface.text_at(105.0, 500.0), Some("LA"));
        match &surface.ops()[2] {
            DrawOp::Text { x, .. } => {
                let width = text_width("State", FontSize::TinyText.points(), Weight::Regular);
                assert!((x + width / 2.0 - 140.0).abs() < 1e-3);
            }
            other => panic!("expected caption, got {other:?}"),
        }
    }

    #[test]
    fn date_value_formats_and_rejects() {
        let mut surface = RecordingSurface::new();
        {
            let mut canvas = Canvas::new(&mut surface);
            canvas
                .date_value(&Some("2024-01-15".to_string()), Anchor::new(70.0, 690.0))
                .unwrap();
            let err = canvas
                .date_value(&Some("15 January".to_string()), Anchor::new(70.0, 690.0))
                .unwrap_err();
            assert!(matches!(err, AppError::DateError(_)));
        }
        assert_eq!(surface.texts(), vec!["01/15/2024"]);
    }

    #[test]
    fn unprintable_value_fails_and_draws_nothing() {
        let mut surface = RecordingSurface::new();
        let err = Canvas::new(&mut surface)
            .value(&Some("Nguyễn".to_string()), Anchor::new(5.0, 6.0))
            .unwrap_err();
        assert!(matches!(err, AppError::InputError(message) if message.contains("Nguyễn")));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn value_lines_fill_one_anchor_per_line() {
        let lines = [Anchor::new(41.0, 522.0), Anchor::new(41.0, 514.0)];
        let mut surface = RecordingSurface::new();
        Canvas::new(&mut surface)
            .value_lines(
                &Some("Lucas 05/02/2016\r\n\nAva 09/30/2019\nNoah 01/01/2020".to_string()),
                &lines,
            )
            .unwrap();
        assert_eq!(surface.texts(), vec!["Lucas 05/02/2016", "Ava 09/30/2019"]);
        assert_eq!(surface.text_at(41.0, 514.0), Some("Ava 09/30/2019"));
    }
}
