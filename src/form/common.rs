// Renderers for regions that both templates print the same way, parameterised
// by where the template puts them.

use crate::canvas::Canvas;
use crate::form::Sex;
use crate::style::{Anchor, FontSize, Rect, Rule, Weight, BANNER_GRAY, BORDER_WIDTH};

/// Interior of the administrative box, identical on every template. Drops are
/// measured down from the box's top edge; rules are `x` offsets from its left
/// edge with their width, and sit `RULE_DROP` below their row's baseline.
pub mod admin_box {
    use crate::style::Rule;

    pub const HEADER_DROP: f32 = 10.0;
    pub const LABEL_INSET: f32 = 3.0;
    pub const PNO_DROP: f32 = 18.0;
    pub const ENTERED_DROP: f32 = 27.0;
    pub const INITIALS_DROP: f32 = 36.0;
    pub const RULE_DROP: f32 = 2.0;

    pub const PNO_RULE: Rule = Rule::new(23.0, 0.0, 75.0);
    pub const ENTERED_RULE: Rule = Rule::new(48.0, 0.0, 50.0);
    pub const INITIALS_RULE: Rule = Rule::new(28.0, 0.0, 22.0);
    pub const VERIFIED_LABEL_X: f32 = 55.0;
    pub const VERIFIED_RULE: Rule = Rule::new(85.0, 0.0, 35.0);
}

/// F and M sit this far right of their checkboxes
pub const SEX_LETTER_GAP: f32 = 12.0;

/// Clerk's "FOR LPOR USE ONLY" box in the top-right corner. Always blank.
pub fn administrative_box(canvas: &mut Canvas<'_>, rect: Rect) {
    use admin_box::*;

    canvas.bordered_rect(rect, BORDER_WIDTH, None);

    let top = rect.top();
    canvas.text_centered_in(
        "------FOR LPOR USE ONLY-----",
        rect.x,
        rect.width,
        top - HEADER_DROP,
        FontSize::TinyText,
        Weight::Bold,
    );

    let left = rect.x + LABEL_INSET;
    let rule_at = |offset: Rule, row: f32| Rule::new(rect.x + offset.x, row - RULE_DROP, offset.width);

    let pno = top - PNO_DROP;
    canvas.label("PNO#", Anchor::new(left, pno), FontSize::TinyText);
    canvas.rule(rule_at(PNO_RULE, pno));

    let entered = top - ENTERED_DROP;
    canvas.label("Date Entered:", Anchor::new(left, entered), FontSize::TinyText);
    canvas.rule(rule_at(ENTERED_RULE, entered));

    let initials = top - INITIALS_DROP;
    canvas.label("Initials:", Anchor::new(left, initials), FontSize::TinyText);
    canvas.rule(rule_at(INITIALS_RULE, initials));
    canvas.label(
        "Verified by:",
        Anchor::new(rect.x + VERIFIED_LABEL_X, initials),
        FontSize::TinyText,
    );
    canvas.rule(rule_at(VERIFIED_RULE, initials));
}

/// Grey banner with a bold title centered on the page. The banner is painted
/// first so the title sits on top of it.
pub fn title_banner(canvas: &mut Canvas<'_>, banner: Rect, title: &str, baseline_y: f32, size: FontSize) {
    canvas.filled_rect(banner, BANNER_GRAY);
    canvas.centered_text(title, baseline_y, size, Weight::Bold);
}

/// Exclusive F/M pair. Exactly one box is marked for a recognised value;
/// absent or unrecognised values leave both empty.
pub fn sex_choice(canvas: &mut Canvas<'_>, sex: Option<Sex>, label: Anchor, female: Anchor, male: Anchor) {
    canvas.label("Sex:", label, FontSize::FormLabel);
    canvas.option(female, sex == Some(Sex::Female));
    canvas.label("F", Anchor::new(female.x + SEX_LETTER_GAP, label.y), FontSize::FormLabel);
    canvas.option(male, sex == Some(Sex::Male));
    canvas.label("M", Anchor::new(male.x + SEX_LETTER_GAP, label.y), FontSize::FormLabel);
}

/// Distribution list plus the template revision in the bottom-right corner.
pub fn distribution_footer(canvas: &mut Canvas<'_>, lines: &[(&str, Anchor)], version: &str, version_at: Anchor) {
    for (text, at) in lines {
        canvas.label(text, *at, FontSize::TinyText);
    }
    canvas.label(version, version_at, FontSize::TinyText);
}
